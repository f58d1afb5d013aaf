use std::path::{Path, PathBuf};

use linkrule_core::{ConfigError, RawRuleSet};
use linkrule_lib::{Diagnostics, RuleSet};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load and compile a rule file. Rejected rules come back as diagnostics.
pub fn load_rules(path: &Path) -> Result<(RuleSet, Diagnostics), LoadError> {
    let raw = RawRuleSet::load(path)?;
    log::debug!("loaded {} rules from {}", raw.rules.len(), path.display());
    Ok(RuleSet::compile_with_diagnostics(&raw))
}

pub fn read_document(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
