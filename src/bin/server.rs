#[macro_use]
extern crate log;

use faceit_lookup::routes::{router, AppState};
use faceit_lookup::{Config, FaceitClient, SteamClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("faceit_lookup=info,server=info");
    env_logger::Builder::from_env(env).init();

    let config = Config::from_env()?;
    let state = AppState::new(
        FaceitClient::from_config(&config)?,
        SteamClient::from_config(&config)?,
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
