//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and colors
//! used across report sections and install output.

use super::theme::Theme;

/// Canonical status kinds used across all trainkit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Component present / operation succeeded.
    Present,
    /// Component missing / operation failed.
    Missing,
    /// Neutral informational line.
    Info,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Present => "✓",
            Self::Missing => "✗",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Present => theme.success.apply_to(icon).to_string(),
            Self::Missing => theme.error.apply_to(icon).to_string(),
            Self::Info => theme.info.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("  {} {}", self.styled(theme), msg)
    }
}
