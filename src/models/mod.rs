pub mod match_data;
pub mod player;
pub mod steam;
