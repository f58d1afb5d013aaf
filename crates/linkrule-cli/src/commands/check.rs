use std::path::PathBuf;

use super::rules_loader::load_rules;

pub struct CheckArgs {
    pub rules_path: PathBuf,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
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

    let is_valid = if args.strict {
        diagnostics.is_empty()
    } else {
        !diagnostics.has_errors()
    };
    if !is_valid {
        std::process::exit(1);
    }

    log::info!("{} rules ok", rules.len());
    // Silent on success (like cargo check)
}
