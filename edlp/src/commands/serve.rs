// edlp/src/commands/serve.rs
//
// USE CASE: Run the REST API.

use std::path::PathBuf;

use edlp_core::infrastructure::config::load_app_config;
use edlp_core::infrastructure::http::serve;

pub async fn execute(config_dir: PathBuf) -> anyhow::Result<()> {
    println!("⚙️  Loading configuration...");
    let config = load_app_config(&config_dir)?;
    println!(
        "   Store: {:?} ({}) | Bind: {}",
        config.store, config.db_path, config.bind
    );

    serve(&config).await?;
    Ok(())
}
