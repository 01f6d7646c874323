// SPDX-License-Identifier: MPL-2.0
use cad_folio::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
cad_folio - portfolio viewer with a CAD image gallery

USAGE:
  cad_folio [OPTIONS] [CATALOG]

ARGS:
  <CATALOG>            Portfolio catalog (default: ./portfolio.toml)

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir")?;
    let catalog_path = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    Ok(Flags {
        lang,
        config_dir,
        catalog_path,
    })
}

fn main() -> iced::Result {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
