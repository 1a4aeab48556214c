mod cli;
mod markdown;
mod repl;

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/nexus-cli/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env before reading any overrides
    load_dotenv();

    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("nexus=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "nexus=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Nexus v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = match args.config {
        Some(ref path) => nexus_config::toml_loader::load_from_path(Path::new(path)),
        None => nexus_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        nexus_config::NexusConfig::default()
    });

    // Endpoint precedence: flag > environment > config file
    if let Ok(endpoint) = std::env::var("NEXUS_ENDPOINT") {
        config.backend.endpoint = endpoint;
    }
    if let Some(endpoint) = args.endpoint {
        config.backend.endpoint = endpoint;
    }
    tracing::info!("Using endpoint {}", config.backend.endpoint);

    if let Err(e) = repl::run(config).await {
        tracing::error!("REPL error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
