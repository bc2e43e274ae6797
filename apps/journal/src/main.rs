mod config;
mod main_lib;
mod scheduler;

use config::Config;
use main_lib::{build_state, init_tracing, run_refresh_cycle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config).await?;

    let dashboard = run_refresh_cycle(&state).await?;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
