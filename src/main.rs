// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};
use iced_snackbar::config::paths;

const HELP: &str = "\
iced_snackbar demo

USAGE:
  iced_snackbar [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <PATH>   Read snackbar.toml from PATH
  -h, --help            Print this help
";

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (lang, config_dir) = match parse_options(&mut args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(config_dir);
    app::run(Flags { lang })
}

fn parse_options(
    args: &mut pico_args::Arguments,
) -> Result<(Option<String>, Option<String>), pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    Ok((lang, config_dir))
}

/// `RUST_LOG` wins over the default filter.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("iced_snackbar=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
