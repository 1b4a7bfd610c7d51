use is_terminal::IsTerminal;

use hassfest::config::{ColorMode, Config, Verbosity};

/// Rendering decisions for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub color: bool,
    pub unicode: bool,
    /// Emit GitHub Actions workflow annotations (never alongside NDJSON)
    pub annotations: bool,
}

impl UiContext {
    pub fn new(json: bool, config: &Config) -> Self {
        Self::detect(
            json,
            config,
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    pub(crate) fn detect(
        json: bool,
        config: &Config,
        get_env: impl Fn(&str) -> Option<String>,
        is_tty: bool,
    ) -> Self {
        let term = get_env("TERM").unwrap_or_default();
        let term_is_dumb = term.eq_ignore_ascii_case("dumb");
        let no_color = get_env("NO_COLOR").is_some();

        let color = !json
            && match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => is_tty && !term_is_dumb && !no_color,
            };

        Self {
            json,
            verbosity: config.output.verbosity,
            color,
            unicode: !term_is_dumb,
            annotations: !json && get_env("GITHUB_ACTIONS").is_some_and(|v| v == "true"),
        }
    }

    pub fn quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    pub fn verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
