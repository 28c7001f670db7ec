use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use heliostore::admin::CatalogStats;
use heliostore::backend::hosted::HostedBackend;
use heliostore::catalog::CatalogStore;
use heliostore::config::Config;
use heliostore::storage::LocalStorage;
use heliostore::sync::{SyncService, SyncStatus};
use heliostore::logger;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    if config.store.base_url.is_empty() {
        eprintln!("Error: no store.base_url configured");
        eprintln!("\nTo use this app:");
        eprintln!("1. Generate a config file: see heliostore.toml or the XDG config path");
        eprintln!("2. Set store.base_url to your hosted data service URL");
        return Ok(());
    }

    // Check if the API key is set
    let api_key = match std::env::var(&config.store.api_key_env) {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Error: {} environment variable not set", config.store.api_key_env);
            eprintln!("\nTo use this app:");
            eprintln!("1. Get the service API key from your project settings");
            eprintln!(
                "2. Set it as environment variable: export {}=your_key_here",
                config.store.api_key_env
            );
            eprintln!("3. Run the app again to see your catalog!");
            return Ok(());
        }
    };

    let storage = Arc::new(Mutex::new(LocalStorage::new(config.cache.in_memory).await?));
    let store = Arc::new(CatalogStore::new(Arc::clone(&storage)));
    store.load_cached().await?;

    let cached = store.products().len();
    if cached > 0 {
        println!("Restored {cached} products from the local cache");
    }

    let backend = Arc::new(HostedBackend::new(
        &config.store.base_url,
        &api_key,
        &config.store.bucket,
    )?);
    let sync = SyncService::new(
        backend,
        Arc::clone(&store),
        storage,
        config.store.placeholder_image.clone(),
    );

    match sync.refresh().await? {
        SyncStatus::Success { fetched } => println!("Refreshed catalog: {fetched} products"),
        SyncStatus::Error { message } => eprintln!("{message}"),
        SyncStatus::InProgress => {}
    }

    let stats = CatalogStats::compute(&store.products(), chrono::Utc::now());
    println!("{}", stats.summary());

    Ok(())
}
