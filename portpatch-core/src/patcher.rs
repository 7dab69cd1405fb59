use anyhow::Context;
use log::{info, warn};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    diff::{changed_line_count, unified_diff},
    rules::{port_rules, ReplaceRule},
};

pub const DEFAULT_COMPOSE_FILE: &str = "/root/salon-saas/infra/docker-compose.yml";

pub const SUCCESS_MESSAGE: &str = "Ports updated successfully";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Occurrences replaced by each rule, in rule order
    pub replacements: Vec<usize>,
}

impl Rewrite {
    pub fn total_replacements(&self) -> usize {
        self.replacements.iter().sum()
    }
}

/// Rewrites the port mappings of a single compose file in place.
///
/// The file is treated as opaque text: it is read whole, passed through each rule in turn, and
/// written back whole. The write truncates the existing file rather than going through a
/// temporary file, so a failure part way through can leave it truncated.
#[derive(Clone, Debug)]
pub struct ConfigPatcher {
    path: PathBuf,
    rules: Vec<ReplaceRule>,
}

impl ConfigPatcher {
    pub fn new(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.into(),
            rules: port_rules()?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> anyhow::Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    pub fn rewrite_ports(&self, text: &str) -> Rewrite {
        let mut text = text.to_owned();
        let mut replacements = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (replaced, count) = rule.apply(&text);
            if count > 0 {
                text = replaced.into_owned();
            }
            info!(
                "Replaced {count} occurrence(s) of {:?} with {:?}",
                rule.search(),
                rule.replacement()
            );
            replacements.push(count);
        }

        Rewrite { text, replacements }
    }

    pub fn save(&self, text: &str) -> anyhow::Result<()> {
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Loads, rewrites and saves the file, returning the status message to show the user.
    ///
    /// The file is written and the same message returned even when no rule matched.
    pub fn run(&self) -> anyhow::Result<&'static str> {
        info!("Patching ports in {}", self.path.display());
        let content = self.load()?;
        let rewrite = self.rewrite_ports(&content);
        if rewrite.total_replacements() == 0 {
            warn!(
                "No port mappings matched in {}, file left unchanged",
                self.path.display()
            );
        }
        self.save(&rewrite.text)?;
        Ok(SUCCESS_MESSAGE)
    }

    /// Same as [`ConfigPatcher::run`] but never writes: returns a unified diff of the change.
    pub fn preview(&self) -> anyhow::Result<String> {
        let content = self.load()?;
        let rewrite = self.rewrite_ports(&content);
        let path = self.path.to_string_lossy();

        if rewrite.text == content {
            info!("Dry run: no changes to {path}");
            return Ok(format!("No changes to {path}\n"));
        }

        info!(
            "Dry run: {} line(s) would change in {path}",
            changed_line_count(&content, &rewrite.text)
        );
        Ok(unified_diff(&content, &rewrite.text, &path))
    }
}
