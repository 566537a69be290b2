use chrono::Local;
use ck_app::models::EntryPreview;
use ck_app::paste::{DeliveryMode, StrategyKind};
use ck_app::PasteReport;
use ck_core::ContentKind;

/// One list row: `  3. [text] preview  (Safari, 14:02:11)`.
pub fn render_row(preview: &EntryPreview) -> String {
    let kind = match preview.kind {
        ContentKind::Text if preview.is_password => "secret",
        ContentKind::Text => "text",
        ContentKind::Image => "image",
    };
    let time = preview.created_at.with_timezone(&Local).format("%H:%M:%S");
    let origin = match &preview.source_app {
        Some(app) => format!("{app}, {time}"),
        None => time.to_string(),
    };
    format!("{:>3}. [{kind}] {}  ({origin})", preview.position, preview.preview)
}

pub fn render_list(previews: &[EntryPreview]) -> String {
    if previews.is_empty() {
        return "history is empty".to_string();
    }
    previews
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line outcome of a paste command.
pub fn render_report(position: usize, report: &PasteReport) -> String {
    let Some(strategy) = report.delivered_by else {
        return format!("entry {position} could not be delivered");
    };
    let strategy = match strategy {
        StrategyKind::AccessibilityInsert => "accessibility insert",
        StrategyKind::ScriptedPaste => "scripted paste",
        StrategyKind::SyntheticShortcut => "synthetic shortcut",
        StrategyKind::TypedCharacters => "typed characters",
    };
    let verb = match report.mode {
        DeliveryMode::Clipboard => "pasted",
        DeliveryMode::DirectInsert => "appended",
    };
    let mut line = format!("{verb} entry {position} via {strategy}");
    if report.link_converted {
        line.push_str(", converted to link");
    }
    line
}
