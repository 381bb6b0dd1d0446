//! # Validate Subcommand
//!
//! Document-level schema validation of a materialized document against
//! a JSON Schema from a schema directory.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use swire_doc::{DocumentValidator, WireFragment};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON materialization of the document.
    #[arg(long)]
    pub input: PathBuf,

    /// Directory holding `*.schema.json` files.
    #[arg(long)]
    pub schema_dir: PathBuf,

    /// Schema filename to validate against.
    #[arg(long)]
    pub schema: String,
}

/// Run the validate subcommand.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;
    let fragment = WireFragment::from_json_value(&json)?;

    let validator = DocumentValidator::new(&args.schema_dir)?;
    validator.validate_fragment(&fragment, &args.schema)?;
    println!("{}: valid against {}", args.input.display(), args.schema);
    Ok(())
}
