//! Print-config command - show the effective taxonomy

use anstream::print;
use changelog_gen::error::Result;
use changelog_gen::taxonomy::load_taxonomy;
use std::path::Path;

/// Print the taxonomy that a generate run would use, as TOML
pub fn run_print_config(config: Option<&Path>) -> Result<()> {
    let taxonomy = load_taxonomy(config)?;
    print!("{}", taxonomy.to_toml()?);
    Ok(())
}
