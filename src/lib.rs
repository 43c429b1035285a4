pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod identifier;
pub mod lookup;
pub mod models;
pub mod resolver;
pub mod routes;
pub mod sources;
pub mod stats;

pub use client::{FaceitClient, SteamClient};
pub use config::Config;
pub use error::LookupError;
pub use identifier::{classify, IdentifierKind, SteamId64};
pub use lookup::PlayerLookup;
pub use models::player::PlayerProfile;
pub use stats::AggregatedStats;
