//! TUI constants: colors and timing.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent, soft cyan (#7EC8E3); used for provider headers.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Spinner frames for the catalog loading animation (braille pattern, 4 frames).
pub(super) const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸"];

/// Spinner frame duration in milliseconds.
pub(super) const SPINNER_FRAME_MS: u128 = 120;
