use std::path::Path;

use crate::patcher::ConfigPatcher;

/// Patch the port mappings of the file at `path`, returning the text to print on success
pub fn patch_ports(path: &Path) -> anyhow::Result<String> {
    let patcher = ConfigPatcher::new(path)?;
    let message = patcher.run()?;
    Ok(format!("{message}\n"))
}

/// Show what [`patch_ports`] would change without touching the file
pub fn preview_ports(path: &Path) -> anyhow::Result<String> {
    ConfigPatcher::new(path)?.preview()
}
