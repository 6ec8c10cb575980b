// SPDX-License-Identifier: MPL-2.0
use recipe_lens::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
recipe_lens

USAGE:
  recipe_lens [OPTIONS] [ROUTE]

ARGS:
  [ROUTE]               Initial path, e.g. /recipe/52772 (default: /)

OPTIONS:
  --lang <en|es>        Display language for this session
  --source <MODE>       static, random or paginated
  --search <NAME>       Start with a name search
  --data-dir <PATH>     Override the data directory
  --config-dir <PATH>   Override the config directory
  -h, --help            Print help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recipe_lens=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: option(&mut args, "--lang"),
        source: option(&mut args, "--source"),
        search: option(&mut args, "--search"),
        data_dir: option(&mut args, "--data-dir"),
        config_dir: option(&mut args, "--config-dir"),
        route: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

fn option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(key, error = %err, "ignoring invalid argument");
        None
    })
}
