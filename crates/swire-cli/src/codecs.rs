//! # Codecs Subcommand
//!
//! Lists the registered codecs with their dispatch identities, in
//! registration order.

use clap::Args;

use swire_codec::default_registry;

/// Arguments for the codecs subcommand.
#[derive(Args, Debug)]
pub struct CodecsArgs {}

/// Run the codecs subcommand.
pub fn run(_args: CodecsArgs) -> anyhow::Result<()> {
    let registry = default_registry()?;
    for codec in registry.codecs() {
        println!("{}", codec.name());
        for key in codec.keys() {
            println!("  key   {key}");
        }
        for (tag, media_type) in codec.supported_types() {
            println!("  type  {tag} ({media_type})");
        }
    }
    Ok(())
}
