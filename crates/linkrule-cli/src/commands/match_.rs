use linkrule_core::Breadcrumb;
use linkrule_lib::PathMatcher;
use linkrule_lib::diagnostics::Diagnostics;

pub struct MatchArgs {
    pub query: String,
    pub breadcrumb: Vec<String>,
    pub color: bool,
}

pub fn run(args: MatchArgs) {
    let matcher = PathMatcher::compile(&args.query);

    if let Some(err) = matcher.error() {
        let mut diagnostics = Diagnostics::new();
        diagnostics
            .warning(err.to_string())
            .source(args.query.as_str(), err.span())
            .emit();
        eprint!("{}", diagnostics.printer().colored(args.color).render());
    }

    let breadcrumb: Breadcrumb = args.breadcrumb.into_iter().collect();
    println!("{}", matcher.matches(&breadcrumb));
}
