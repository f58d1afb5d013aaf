//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Rule file (positional).
pub fn rules_path_arg() -> Arg {
    Arg::new("rules_path")
        .value_name("RULES")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON rule file")
}

/// Document to scan (positional).
pub fn document_path_arg() -> Arg {
    Arg::new("document_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Document to scan for links")
}

/// Workspace root (-w/--workspace).
pub fn workspace_arg() -> Arg {
    Arg::new("workspace")
        .short('w')
        .long("workspace")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Workspace root for ${workspaceFolder} and relative globs")
}

/// Inline path query (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("QUERY")
        .required(true)
        .allow_hyphen_values(true)
        .help("Path query, e.g. '$..dependencies.*'")
}

/// Breadcrumb tokens (positional, trailing).
pub fn breadcrumb_arg() -> Arg {
    Arg::new("breadcrumb")
        .value_name("TOKEN")
        .num_args(0..)
        .trailing_var_arg(true)
        .allow_hyphen_values(true)
        .help("Breadcrumb tokens from the root, e.g. store book 0 price")
}

/// Extra variable (--var NAME=VALUE).
pub fn var_arg() -> Arg {
    Arg::new("var")
        .long("var")
        .value_name("NAME=VALUE")
        .action(ArgAction::Append)
        .help("Define or override a ${NAME} variable")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .global(true)
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace)")
}
