use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme::{colors, tags};

/// Bracketed status marker that starts a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Kept,
    Deleted,
    WouldDelete,
    Error,
    Aborted,
    Warning,
}

impl StatusTag {
    pub fn text(self) -> &'static str {
        match self {
            StatusTag::Kept => tags::KEPT,
            StatusTag::Deleted => tags::DELETED,
            StatusTag::WouldDelete => tags::WOULD_DELETE,
            StatusTag::Error => tags::ERROR,
            StatusTag::Aborted => tags::ABORTED,
            StatusTag::Warning => tags::WARNING,
        }
    }

    pub fn render(self, supports_color: bool) -> String {
        if !supports_color {
            return self.text().to_string();
        }

        let styled = match self {
            StatusTag::Kept => self.text().with(colors::SUCCESS),
            StatusTag::Deleted | StatusTag::WouldDelete => self.text().with(colors::WARNING),
            StatusTag::Error | StatusTag::Aborted => self.text().with(colors::ERROR).bold(),
            StatusTag::Warning => self.text().with(colors::WARNING),
        };
        format!("{}", styled)
    }

    /// `<tag> <message>` as one line, without trailing newline
    pub fn line(self, message: impl fmt::Display, supports_color: bool) -> String {
        format!("{} {}", self.render(supports_color), message)
    }
}

/// Section heading such as `Job Call Tree:`
pub fn heading(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(colors::INFO).bold())
    } else {
        text.to_string()
    }
}

/// De-emphasised text for summaries
pub fn dim(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(colors::DIM))
    } else {
        text.to_string()
    }
}
