//! Persistence for the taxonomy in `$CONFIG_DIR/changelog-gen/`.

use super::Taxonomy;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name for changelog-gen configuration within the user config dir.
const CONFIG_DIR: &str = "changelog-gen";

/// Filename for the taxonomy.
const TAXONOMY_FILE: &str = "taxonomy.toml";

/// Get path to the per-user taxonomy file, if the platform has a config dir.
pub fn default_taxonomy_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(TAXONOMY_FILE))
}

/// Load the effective taxonomy.
///
/// An explicit path must exist. Without one, the per-user file is used when
/// present, otherwise the built-in tables.
pub fn load_taxonomy(explicit: Option<&Path>) -> Result<Taxonomy> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!("{} does not exist", path.display())));
            }
            path.to_path_buf()
        }
        None => match default_taxonomy_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("no taxonomy file found, using built-in rules");
                return Ok(Taxonomy::default());
            }
        },
    };

    debug!(path = %path.display(), "loading taxonomy");
    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let taxonomy: Taxonomy = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    taxonomy.validate()?;
    Ok(taxonomy)
}

/// Save a taxonomy to disk, creating parent directories as needed.
pub fn save_taxonomy(path: &Path, taxonomy: &Taxonomy) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir)
            .map_err(|e| Error::Config(format!("failed to create {}: {e}", dir.display())))?;
    }

    let content = taxonomy.to_toml()?;
    fs::write(path, content)
        .map_err(|e| Error::Config(format!("failed to write {}: {e}", path.display())))?;

    Ok(())
}

impl Taxonomy {
    /// The taxonomy as a TOML document with a header comment
    pub fn to_toml(&self) -> Result<String> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize taxonomy: {e}")))?;

        Ok(format!(
            "# changelog-gen taxonomy\n# Rule order is display order\n\n{content}"
        ))
    }
}
