mod cli;
mod commands;
mod logging;


use cli::{AstParams, GlslParams, ListParams, ManifestParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    logging::init(m.get_count("verbose"));

    match name {
        "list" => {
            let _params = ListParams::from_matches(m);
            commands::list::run();
        }
        "ast" => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        "glsl" => {
            let params = GlslParams::from_matches(m);
            commands::glsl::run(params.into());
        }
        "manifest" => {
            let params = ManifestParams::from_matches(m);
            commands::manifest::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
