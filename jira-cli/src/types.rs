// ABOUTME: Type definitions and enums for the Jira CLI
// ABOUTME: Maps status-category color tags onto terminal colors

use owo_colors::OwoColorize;
use std::fmt;

/// The color tag Jira attaches to a status category.
///
/// "blue-gray" groups to-do statuses, "yellow" in-progress, "green" done.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryColor {
    BlueGray,
    Yellow,
    Green,
    Unknown(String),
}

impl From<&str> for CategoryColor {
    fn from(s: &str) -> Self {
        match s {
            "blue-gray" | "medium-gray" => CategoryColor::BlueGray,
            "yellow" => CategoryColor::Yellow,
            "green" => CategoryColor::Green,
            other => CategoryColor::Unknown(other.to_string()),
        }
    }
}

impl From<Option<&str>> for CategoryColor {
    fn from(s: Option<&str>) -> Self {
        s.map(CategoryColor::from)
            .unwrap_or(CategoryColor::Unknown(String::new()))
    }
}

impl CategoryColor {
    /// Apply this color to `text`, or pass it through unchanged when
    /// color is disabled or the tag is unrecognized.
    pub fn paint(&self, text: &str, use_color: bool) -> String {
        if !use_color {
            return text.to_string();
        }

        match self {
            CategoryColor::BlueGray => format!("{}", text.bright_black()),
            CategoryColor::Yellow => format!("{}", text.yellow()),
            CategoryColor::Green => format!("{}", text.green()),
            CategoryColor::Unknown(_) => text.to_string(),
        }
    }
}

impl fmt::Display for CategoryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryColor::BlueGray => write!(f, "blue-gray"),
            CategoryColor::Yellow => write!(f, "yellow"),
            CategoryColor::Green => write!(f, "green"),
            CategoryColor::Unknown(s) => write!(f, "{}", s),
        }
    }
}
