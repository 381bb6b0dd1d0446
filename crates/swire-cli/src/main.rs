//! # swire CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// sensorwire CLI — observation-service codec toolchain.
///
/// Encodes and decodes service documents through the codec registry,
/// lists registered codecs, and validates materialized documents.
#[derive(Parser, Debug)]
#[command(name = "swire", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Encode a JSON domain value into a wire document.
    Encode(swire_cli::encode::EncodeArgs),
    /// Decode a materialized document back into a domain value.
    Decode(swire_cli::decode::DecodeArgs),
    /// List registered codecs with their dispatch identities.
    Codecs(swire_cli::codecs::CodecsArgs),
    /// Validate a materialized document against a JSON Schema.
    Validate(swire_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => swire_cli::encode::run(args),
        Commands::Decode(args) => swire_cli::decode::run(args),
        Commands::Codecs(args) => swire_cli::codecs::run(args),
        Commands::Validate(args) => swire_cli::validate::run(args),
    }
}
