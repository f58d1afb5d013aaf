//! Per-document `${name}` variables.

use std::path::{MAIN_SEPARATOR_STR, Path};

use indexmap::IndexMap;

/// Ordered name → value map consulted by the variable resolver.
///
/// Insertion order is kept so that listings (and debug output) are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Variables {
    values: IndexMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Predefined variables for `file`, optionally inside `workspace_root`.
    ///
    /// Provides `workspaceFolder`, `workspaceFolderBasename`, `file`, `fileBasename`,
    /// `fileBasenameNoExtension`, `fileExtname`, `fileDirname`, `relativeFile`,
    /// `relativeFileDirname` and `pathSeparator`. Workspace variables are absent
    /// when no root is given.
    pub fn for_document(workspace_root: Option<&Path>, file: &Path) -> Self {
        let mut vars = Self::new();

        if let Some(root) = workspace_root {
            vars.insert("workspaceFolder", display(root));
            vars.insert(
                "workspaceFolderBasename",
                root.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
            );
        }

        vars.insert("file", display(file));
        vars.insert(
            "fileBasename",
            file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
        );
        vars.insert(
            "fileBasenameNoExtension",
            file.file_stem().map(|n| n.to_string_lossy()).unwrap_or_default(),
        );
        vars.insert(
            "fileExtname",
            file.extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default(),
        );
        vars.insert("fileDirname", file.parent().map(display).unwrap_or_default());

        let relative = workspace_root
            .and_then(|root| file.strip_prefix(root).ok())
            .unwrap_or(file);
        vars.insert("relativeFile", display(relative));
        vars.insert(
            "relativeFileDirname",
            relative.parent().map(display).unwrap_or_default(),
        );
        vars.insert("pathSeparator", MAIN_SEPARATOR_STR);

        vars
    }

    /// Add or override a variable.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
#[path = "variables_tests.rs"]
mod variables_tests;
