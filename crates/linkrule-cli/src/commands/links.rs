use std::path::{Path, PathBuf};

use serde::Serialize;

use linkrule_core::Variables;
use linkrule_lib::{LinkEngine, NodeLink, TextLink};

use super::rules_loader::{load_rules, read_document};

pub struct LinksArgs {
    pub rules_path: PathBuf,
    pub document_path: PathBuf,
    pub workspace: Option<PathBuf>,
    pub vars: Vec<(String, String)>,
    pub color: bool,
}

/// One output line.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LinkLine<'a> {
    Node {
        path: String,
        value: &'a str,
        target: &'a str,
        tooltip: &'a str,
    },
    Text {
        start: usize,
        end: usize,
        text: &'a str,
        target: &'a str,
        tooltip: &'a str,
    },
}

impl<'a> LinkLine<'a> {
    pub fn node(link: &'a NodeLink) -> Self {
        LinkLine::Node {
            path: link.breadcrumb.to_string(),
            value: &link.value,
            target: &link.link.target,
            tooltip: &link.link.tooltip,
        }
    }

    pub fn text(link: &'a TextLink, document: &'a str) -> Self {
        LinkLine::Text {
            start: link.range.start,
            end: link.range.end,
            text: &document[link.range.clone()],
            target: &link.link.target,
            tooltip: &link.link.tooltip,
        }
    }
}

pub fn run(args: LinksArgs) {
    let (rules, diagnostics) = match load_rules(&args.rules_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.printer().colored(args.color).render());
    }

    let text = match read_document(&args.document_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let variables = document_variables(&args);
    let file = glob_path(&args.document_path, args.workspace.as_deref());
    let mut engine = LinkEngine::new(rules);

    for line in collect_lines(&mut engine, file, &text, &variables) {
        println!("{line}");
    }
}

/// Structural links first (only when the document is JSON), then text links.
pub fn collect_lines(
    engine: &mut LinkEngine,
    file: &Path,
    text: &str,
    variables: &Variables,
) -> Vec<String> {
    let node_links = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(document) => engine.document_links(file, &document, variables),
        Err(e) => {
            log::debug!("{} is not JSON ({e}), skipping path rules", file.display());
            Vec::new()
        }
    };
    let text_links = engine.text_links(file, text, variables);

    node_links
        .iter()
        .map(LinkLine::node)
        .chain(text_links.iter().map(|link| LinkLine::text(link, text)))
        .filter_map(|line| serde_json::to_string(&line).ok())
        .collect()
}

fn document_variables(args: &LinksArgs) -> Variables {
    let file = args
        .document_path
        .canonicalize()
        .unwrap_or_else(|_| args.document_path.clone());
    let root = args
        .workspace
        .as_ref()
        .map(|dir| dir.canonicalize().unwrap_or_else(|_| dir.clone()));

    let mut variables = Variables::for_document(root.as_deref(), &file);
    for (name, value) in &args.vars {
        variables.insert(name.as_str(), value.as_str());
    }
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("variables: {}", serde_json::to_string(&variables).unwrap_or_default());
    }
    variables
}

/// Globs match the path relative to the workspace when it is inside it.
fn glob_path<'p>(document: &'p Path, workspace: Option<&Path>) -> &'p Path {
    workspace
        .and_then(|root| document.strip_prefix(root).ok())
        .unwrap_or(document)
}
