use anyhow::Context;
use clap::Parser;
use notez::api::{NotesApi, SharedNotesApi};
use notez::config::NotezConfig;
use notez::store::fs::FileStore;
use notez::store::DataStore;

mod args;
use args::Cli;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => NotezConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => NotezConfig::default(),
    }
    .with_overrides(cli.host, cli.port, cli.db_file);

    // Touch the store up front so a bad file fails startup, not the first request
    let store = FileStore::new(&config.db_file);
    let count = store
        .load_db()
        .with_context(|| format!("Failed to open note store {}", config.db_file.display()))?
        .notes
        .len();
    log::info!(
        "Using note store {} ({} notes)",
        store.location().display(),
        count
    );

    let api = SharedNotesApi::new(NotesApi::new(store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("Notes service listening on http://{}", addr);

    notez::server::serve(listener, api)
        .await
        .context("Server error")?;
    Ok(())
}
