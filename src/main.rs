// SPDX-License-Identifier: MPL-2.0
use iced_services::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
IcedServices - service listing administration client

USAGE:
  iced_services [OPTIONS] [LOCATION]

ARGS:
  <LOCATION>            Page to open, e.g. /profile or /service?category=Plumbing

OPTIONS:
  -h, --help            Print this help
      --lang <LOCALE>   UI language (e.g. en-US, fr)
      --token <TOKEN>   Access token used for profile calls
      --api-url <URL>   Backend base URL
      --offline         Serve sample data instead of calling the backend
      --config-dir <DIR>
                        Directory holding settings.toml
      --data-dir <DIR>  Directory receiving exported reports
      --i18n-dir <DIR>  Directory with additional .ftl translations
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let mut flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        token: args.opt_value_from_str("--token")?,
        api_url: args.opt_value_from_str("--api-url")?,
        offline: args.contains("--offline"),
        i18n_dir: args.opt_value_from_str::<_, PathBuf>("--i18n-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        location: None,
    };

    flags.location = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(flags)
}

fn main() -> iced::Result {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
