use anyhow::Result;

use hassfest::config::{Config, ConfigWarning};
use hassfest::presentation::create_run_use_case;
use hassfest::RunReport;

use crate::ui::context::UiContext;

/// Run validate or generate and print the outcome.
///
/// Returns whether the run succeeded; fatal errors propagate.
pub fn cmd_run(config: Config, warnings: &[ConfigWarning], ui: &UiContext) -> Result<bool> {
    let action = config.action;

    if ui.json {
        let _ = crate::ui::json::emit_event(&crate::ui::json::StartEvent::new(action.as_str()));
    } else if !ui.quiet() {
        print!("{}", crate::ui::summary::render_header(action, ui));
        eprint!(
            "{}",
            crate::ui::summary::render_config_warnings(warnings, ui)
        );
    }

    tracing::info!(
        root = %config.root.display(),
        action = action.as_str(),
        "starting run"
    );

    let report = create_run_use_case(config).execute()?;

    print_report(&report, ui);

    Ok(report.is_success())
}

fn print_report(report: &RunReport, ui: &UiContext) {
    if ui.json {
        let mut out = std::io::stdout().lock();
        let _ = crate::ui::json::write_report(&mut out, report);
    } else if !ui.quiet() || !report.is_success() {
        print!("{}", crate::ui::summary::render_report(report, ui));
    }

    if ui.annotations && !ui.json {
        for error in &report.errors {
            let blocking = hassfest::application::is_blocking(report.action, error);
            println!("{}", crate::ui::ci::annotate(error, blocking));
        }
    }
}
