use chrono::NaiveDateTime;
use ratatui::style::Color;

use super::entry::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Warning,
    Success,
    Info,
}

impl NotificationKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "⚠",
            NotificationKind::Success => "✔",
            NotificationKind::Info => "ℹ",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            NotificationKind::Warning => Color::Rgb(0xf5, 0x9e, 0x0b),
            NotificationKind::Success => Color::Rgb(0x10, 0xb9, 0x81),
            NotificationKind::Info => Color::Rgb(0x3b, 0x82, 0xf6),
        }
    }
}

/// A read-only alert. Nothing in the application changes `read`.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: RecordId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: NaiveDateTime,
    pub read: bool,
}
