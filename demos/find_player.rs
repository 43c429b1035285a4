use faceit_lookup::{Config, FaceitClient, LookupError, PlayerLookup, SteamClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let config = Config::from_env()?;
    let faceit = FaceitClient::from_config(&config)?;
    let lookup = PlayerLookup::new(faceit.clone(), faceit, SteamClient::from_config(&config)?);

    match lookup.find_player(&query).await {
        Ok(player) => {
            println!("Player: {} ({})", player.nickname, player.player_id);
            let stats = lookup.aggregated_stats(&player.player_id).await?;
            println!(
                "KR {:.2}  KD {:.2}  ADR {:.1}  Avg kills {:.1}  Winrate {}",
                stats.kr, stats.kd, stats.adr, stats.avg_kills, stats.winrate_label()
            );
        }
        Err(LookupError::NotFound(_)) => {
            println!("No FACEIT player for {query:?}");
        }
        Err(e) => eprintln!("Error: {}", e),
    }
    Ok(())
}
