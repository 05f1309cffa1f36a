mod cli;

use media_segments_api::{
    config,
    host::memory::{AllowAll, MemoryLibraryManager, MemorySegmentManager, StaticKeyPolicy},
    host::{ElevationPolicy, LibraryId},
    plugin,
    segments::ProviderRegistry,
    server::{self, PluginContext},
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Arc;

async fn start_server(
    host: String,
    port: u16,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    // Load config
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    config.server.host = host;
    config.server.port = port;

    tracing::info!("Starting {} {}", plugin::PLUGIN_NAME, plugin::version());
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    // Stand-in host services; a real deployment embeds the router into the
    // host server instead of running this binary.
    let segment_manager = Arc::new(MemorySegmentManager::new());
    let library_manager = Arc::new(MemoryLibraryManager::new());

    // Seed one item so the create endpoint can be exercised immediately.
    let item = library_manager.add_item("Demo Movie", LibraryId::new());
    tracing::info!("Seeded demo item {} ({})", item.id, item.name);

    let mut registry = ProviderRegistry::new();
    plugin::register_services(&mut registry);

    let policy: Arc<dyn ElevationPolicy> = match &config.server.auth.api_key {
        Some(key) if config.server.auth.enabled => {
            tracing::info!("Elevation policy: static API key");
            Arc::new(StaticKeyPolicy::new(key.clone()))
        }
        _ => {
            tracing::info!("Elevation policy: allow all (auth disabled)");
            Arc::new(AllowAll)
        }
    };

    let ctx = PluginContext {
        segment_manager,
        library_manager,
        providers: Arc::new(registry),
        policy,
    };

    server::serve(&config, ctx).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "media_segments_api=trace,tower_http=debug".to_string()
        } else {
            "media_segments_api=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            // Create tokio runtime
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("media-segments-api {}", plugin::version());
            Ok(())
        }
    }
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Auth enabled: {}", config.server.auth.enabled);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
        }
    }

    Ok(())
}
