//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("linkrule")
        .about("Turn values in structured documents into links with declarative rules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(match_command())
        .subcommand(links_command())
}

/// Validate a rule file.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a rule file")
        .after_help(
            r#"EXAMPLES:
  linkrule check rules.json            # report rejected rules and queries
  linkrule check rules.json --strict   # fail on invalid path queries too"#,
        )
        .arg(rules_path_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Test a path query against a breadcrumb.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Test a path query against a breadcrumb")
        .override_usage("  linkrule match -q <QUERY> [TOKEN]...")
        .after_help(
            r#"EXAMPLES:
  linkrule match -q '$..price' store book 0 price   # true
  linkrule match -q '$.a.b' b a                     # false
  linkrule match -q '$'                             # true (root)"#,
        )
        .arg(query_text_arg())
        .arg(breadcrumb_arg())
        .arg(color_arg())
}

/// Print the links a rule file produces for a document.
pub fn links_command() -> Command {
    Command::new("links")
        .about("Print links produced for a document, one JSON object per line")
        .after_help(
            r#"EXAMPLES:
  linkrule links rules.json package.json
  linkrule links rules.json docs/notes.md -w .
  linkrule links rules.json a.json --var host=example.com"#,
        )
        .arg(rules_path_arg())
        .arg(document_path_arg())
        .arg(workspace_arg())
        .arg(var_arg())
        .arg(color_arg())
}
