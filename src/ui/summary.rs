//! Human-readable run summary

use std::fmt::Write;

use hassfest::application::is_blocking;
use hassfest::config::ConfigWarning;
use hassfest::domain::services::{DiffResult, DiffTag};
use hassfest::{Action, RunReport, ValidationError};

use crate::ui::context::UiContext;
use crate::ui::text::ColoredText;
use crate::ui::theme::Icon;

pub fn render_header(action: Action, ui: &UiContext) -> String {
    let title = match action {
        Action::Validate => "Validating zeroconf",
        Action::Generate => "Generating zeroconf",
    };
    format!("{}\n", ColoredText::plain(title).bold().render(ui.color))
}

pub fn render_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let line = format!(
            "{} Unknown config key '{}' in {}",
            Icon::Warning.glyph(ui.unicode),
            w.key,
            location
        );
        let _ = writeln!(out, "{}", ColoredText::warning(line).render(ui.color));
        if let Some(suggestion) = &w.suggestion {
            let _ = writeln!(out, "   Did you mean '{}'?", suggestion);
        }
    }
    out
}

fn render_error_line(out: &mut String, error: &ValidationError, action: Action, ui: &UiContext) {
    let blocking = is_blocking(action, error);
    let icon = if blocking { Icon::Error } else { Icon::Fixable };
    let line = format!("  {} {}", icon.glyph(ui.unicode), error);
    let text = if blocking {
        ColoredText::error(line)
    } else {
        ColoredText::warning(line)
    };
    let _ = write!(out, "{}", text.render(ui.color));
    if error.fixable {
        let _ = write!(out, "{}", ColoredText::dim(" (fixable)").render(ui.color));
    }
    out.push('\n');
}

pub fn render_drift(drift: &DiffResult, ui: &UiContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Drift ({}):", drift.summary());
    for line in drift.changed_lines() {
        let rendered = format!("  {}{}", line.tag.sign(), line.content);
        let text = match line.tag {
            DiffTag::Insert => ColoredText::success(rendered),
            DiffTag::Delete => ColoredText::error(rendered),
            DiffTag::Equal => ColoredText::plain(rendered),
        };
        let _ = writeln!(out, "{}", text.render(ui.color));
    }
    out
}

pub fn render_report(report: &RunReport, ui: &UiContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Integrations: {}", report.integrations);

    let invalid = report.invalid_integrations();
    if !invalid.is_empty() {
        let _ = writeln!(out, "\nInvalid integrations: {}", invalid.len());
        for domain in invalid {
            let _ = writeln!(out, "\nIntegration {}:", domain);
            for error in report
                .integration_errors()
                .filter(|e| e.domain.as_deref() == Some(domain))
            {
                render_error_line(&mut out, error, report.action, ui);
            }
        }
    }

    let general: Vec<&ValidationError> = report.general_errors().collect();
    if !general.is_empty() {
        let _ = writeln!(out, "\nGeneral errors:");
        for error in general {
            render_error_line(&mut out, error, report.action, ui);
        }
    }

    if ui.verbose() {
        if let Some(drift) = &report.drift {
            out.push('\n');
            out.push_str(&render_drift(drift, ui));
        }
    }

    let fixable = report.errors.iter().filter(|e| e.fixable).count();
    if report.action == Action::Validate && fixable > 0 {
        let _ = writeln!(
            out,
            "\n{}",
            ColoredText::dim("Run with --action generate to fix fixable errors.").render(ui.color)
        );
    }

    out.push('\n');
    let status = if let Some(path) = &report.generated {
        ColoredText::success(format!(
            "{} Generated {}",
            Icon::Success.glyph(ui.unicode),
            path.display()
        ))
    } else if report.is_success() {
        ColoredText::success(format!("{} All checks passed", Icon::Success.glyph(ui.unicode)))
    } else {
        ColoredText::error(format!(
            "{} {} blocking error(s)",
            Icon::Error.glyph(ui.unicode),
            report.blocking
        ))
    };
    let _ = writeln!(out, "{}", status.render(ui.color));

    out
}
