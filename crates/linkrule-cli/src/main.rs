mod cli;
mod commands;

use cli::{CheckParams, LinksParams, MatchParams, build_cli, init_logging};

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::match_::run(params.into());
        }
        Some(("links", m)) => {
            let params = LinksParams::from_matches(m);
            commands::links::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
