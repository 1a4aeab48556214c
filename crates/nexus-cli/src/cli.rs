use clap::Parser;

/// Nexus -- a terminal chat client over a single reply endpoint.
#[derive(Parser, Debug)]
#[command(name = "nexus", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Reply endpoint URL override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
