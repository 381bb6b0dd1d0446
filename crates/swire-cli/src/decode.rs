//! # Decode Subcommand
//!
//! Reads a materialized document (JSON form), decodes it through the
//! default registry, and prints the domain value as tagged JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use swire_codec::default_registry;
use swire_core::{CodecKey, MediaType, SERVICE_VERSION};
use swire_doc::WireFragment;

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to the JSON materialization of the document.
    #[arg(long)]
    pub input: PathBuf,

    /// Operation name the codec is keyed under.
    #[arg(long)]
    pub operation: String,

    /// Protocol version of the codec key.
    #[arg(long, default_value = SERVICE_VERSION)]
    pub version: String,

    /// Media type of the codec key.
    #[arg(long, default_value = "application/xml")]
    pub media_type: MediaType,

    /// Write the domain value here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Run the decode subcommand.
pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;
    let fragment = WireFragment::from_json_value(&json)?;

    let key = CodecKey::new(&args.operation, &args.version, args.media_type);
    tracing::info!(%key, fragment = fragment.name(), "decoding");

    let registry = default_registry()?;
    let value = registry.decode(&key, &fragment)?;

    let rendered = serde_json::to_string_pretty(&value)?;
    match &args.out {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
