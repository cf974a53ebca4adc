// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::time::Instant;

use skillforge_landing::app::{self, Flags};
use skillforge_landing::error::Error;
use skillforge_landing::telemetry;

const HELP: &str = "\
skillforge-landing

Animated landing window for the SkillForge learning platform.

USAGE:
  skillforge-landing [OPTIONS]

OPTIONS:
  --lang LOCALE       Interface language in BCP-47 form (e.g. en-US, fr)
  --config-dir DIR    Read and write settings.toml in DIR instead of the
                      platform config directory
  -h, --help          Print this help and exit
  -V, --version       Print the version and exit
";

fn parse_path(value: &std::ffi::OsStr) -> Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(value))
}

/// Unwraps a parsed argument or exits with the usage error.
fn parsed_or_exit<T>(result: Result<T, pico_args::Error>) -> T {
    result.unwrap_or_else(|error| {
        eprintln!("{}", Error::from(error));
        std::process::exit(2);
    })
}

fn main() -> iced::Result {
    // First thing, so the startup report covers argument parsing too.
    let launched_at = Instant::now();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("skillforge-landing {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let lang = parsed_or_exit(args.opt_value_from_str("--lang"));
    let config_dir = parsed_or_exit(args.opt_value_from_os_str("--config-dir", parse_path));

    let rest = args.finish();
    if !rest.is_empty() {
        telemetry::log(&format!("Ignoring unexpected arguments: {rest:?}"));
    }

    // Log panics through the same channel as the rest of the diagnostics
    // before the default hook prints its backtrace.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        telemetry::log(&format!("Panic: {info}"));
        default_hook(info);
    }));

    app::run(Flags {
        lang,
        config_dir,
        launched_at: Some(launched_at),
    })
}
