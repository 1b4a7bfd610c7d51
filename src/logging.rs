//! Tracing subscriber setup for the CLI

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hassfest::config::{ColorMode, Verbosity};

/// Default filter directive for a verbosity level
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "hassfest=error",
        Verbosity::Normal => "hassfest=warn",
        Verbosity::Verbose => "hassfest=info",
        Verbosity::Debug => "hassfest=debug",
    }
}

/// Whether log lines on stderr may carry ANSI styling
pub fn use_ansi(
    color: ColorMode,
    get_env: impl Fn(&str) -> Option<String>,
    stderr_is_tty: bool,
) -> bool {
    match color {
        ColorMode::Never => false,
        ColorMode::Always => true,
        ColorMode::Auto => {
            stderr_is_tty
                && get_env("NO_COLOR").is_none()
                && !get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"))
        }
    }
}

/// Install a compact stderr logger; `RUST_LOG` wins over `verbosity`
pub fn init_cli_logger(verbosity: Verbosity, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // try_init: tests and embedders may already have a subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
