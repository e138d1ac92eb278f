//! Color helpers for stderr messages, disabled under NO_COLOR.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

pub struct Style;

impl Style {
    /// Style for labels (e.g., "model", "tokens")
    pub fn label<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.dimmed())
    }

    /// Style for primary values (e.g., model names, endpoints)
    pub fn value<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.cyan())
    }

    /// Style for error prefixes
    pub fn error<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.red().bold())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.yellow())
    }
}
