//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::links::LinksArgs;
use crate::commands::match_::MatchArgs;

pub struct CheckParams {
    pub rules_path: PathBuf,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            rules_path: required_path(m, "rules_path"),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            rules_path: p.rules_path,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MatchParams {
    pub query: String,
    pub breadcrumb: Vec<String>,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: m.get_one::<String>("query_text").cloned().unwrap_or_default(),
            breadcrumb: m
                .get_many::<String>("breadcrumb")
                .map(|tokens| tokens.cloned().collect())
                .unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            query: p.query,
            breadcrumb: p.breadcrumb,
            color: p.color.should_colorize(),
        }
    }
}

pub struct LinksParams {
    pub rules_path: PathBuf,
    pub document_path: PathBuf,
    pub workspace: Option<PathBuf>,
    pub vars: Vec<(String, String)>,
    pub color: ColorChoice,
}

impl LinksParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            rules_path: required_path(m, "rules_path"),
            document_path: required_path(m, "document_path"),
            workspace: m.get_one::<PathBuf>("workspace").cloned(),
            vars: m
                .get_many::<String>("var")
                .map(|vars| vars.filter_map(|v| parse_var(v)).collect())
                .unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<LinksParams> for LinksArgs {
    fn from(p: LinksParams) -> Self {
        Self {
            rules_path: p.rules_path,
            document_path: p.document_path,
            workspace: p.workspace,
            vars: p.vars,
            color: p.color.should_colorize(),
        }
    }
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// `NAME=VALUE`; the value may itself contain `=`.
fn parse_var(raw: &str) -> Option<(String, String)> {
    let Some((name, value)) = raw.split_once('=') else {
        log::warn!("ignoring --var `{raw}`: expected NAME=VALUE");
        return None;
    };
    Some((name.trim().to_string(), value.to_string()))
}
