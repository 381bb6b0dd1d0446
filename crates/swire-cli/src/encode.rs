//! # Encode Subcommand
//!
//! Reads a JSON domain value, encodes it through the default registry,
//! and prints or writes the materialized document.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};

use swire_codec::default_registry;
use swire_core::{CodecKey, MediaType, SERVICE_VERSION};
use swire_model::DomainValue;

/// Output rendering of the assembled document.
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    /// XML text.
    #[default]
    Xml,
    /// JSON materialization.
    Json,
}

/// Arguments for the encode subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Path to the JSON domain value (tagged with its `type`).
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

    /// Rendering of the assembled document.
    #[arg(long, value_enum, default_value = "xml")]
    pub format: OutputFormat,

    /// Write the document here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Run the encode subcommand.
pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let value: DomainValue = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a valid domain value", args.input.display()))?;

    let key = CodecKey::new(&args.operation, &args.version, args.media_type);
    tracing::info!(%key, tag = %value.tag(), "encoding");

    let registry = default_registry()?;
    let fragment = registry.encode(&key, Some(&value))?;

    let rendered = match args.format {
        OutputFormat::Xml => fragment.to_xml_string()?,
        OutputFormat::Json => serde_json::to_string_pretty(&fragment.to_json_value())?,
    };
    match &args.out {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
