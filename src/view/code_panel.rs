//! Code Panel with Copy Action
//!
//! The copy button writes the snippet to a clipboard and shows "¡Copiado!" for
//! [`COPY_FEEDBACK`]. The revert is modelled as a deadline: pressing again
//! moves the deadline instead of queueing a second revert.

use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);
pub const COPY_LABEL: &str = "Copiar";
pub const COPIED_LABEL: &str = "¡Copiado!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
}

/// Destination of the copy action
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails
    pub fn unavailable() -> Self {
        Self {
            contents: None,
            unavailable: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.unavailable {
            return Err(ClipboardError::Unavailable);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// State of the copy button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyButton {
    copied_until: Option<Instant>,
}

impl CopyButton {
    /// Copy `code` and show the copied label until `now + COPY_FEEDBACK`.
    ///
    /// Clipboard failures are ignored; the label still flips.
    pub fn press<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C, code: &str, now: Instant) {
        if let Err(e) = clipboard.write_text(code) {
            tracing::debug!("Ignoring clipboard failure: {}", e);
        }
        self.copied_until = Some(now + COPY_FEEDBACK);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        matches!(self.copied_until, Some(deadline) if now < deadline)
    }

    /// When the label reverts, if a revert is still pending at `now`
    pub fn revert_at(&self, now: Instant) -> Option<Instant> {
        self.copied_until.filter(|deadline| now < *deadline)
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

/// What the page needs to draw the panel and drive the browser-side button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodePanelView {
    pub code: &'static str,
    pub idle_label: &'static str,
    pub copied_label: &'static str,
    pub feedback_ms: u64,
}

impl CodePanelView {
    pub fn new(code: &'static str) -> Self {
        Self {
            code,
            idle_label: COPY_LABEL,
            copied_label: COPIED_LABEL,
            feedback_ms: COPY_FEEDBACK.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_copies_exact_text_and_flips_label() {
        let mut clipboard = MemoryClipboard::new();
        let mut button = CopyButton::default();
        let t0 = Instant::now();

        assert!(!button.is_copied(t0));
        assert_eq!(button.label(t0), COPY_LABEL);

        button.press(&mut clipboard, "print(df)\n", t0);

        assert_eq!(clipboard.contents(), Some("print(df)\n"));
        assert!(button.is_copied(t0));
        assert_eq!(button.label(t0), COPIED_LABEL);
    }

    #[test]
    fn test_label_reverts_after_feedback_window() {
        let mut clipboard = MemoryClipboard::new();
        let mut button = CopyButton::default();
        let t0 = Instant::now();

        button.press(&mut clipboard, "x", t0);

        assert!(button.is_copied(t0 + Duration::from_millis(1999)));
        assert!(!button.is_copied(t0 + COPY_FEEDBACK));
        assert_eq!(button.label(t0 + Duration::from_secs(3)), COPY_LABEL);
    }

    #[test]
    fn test_second_press_restarts_window() {
        let mut clipboard = MemoryClipboard::new();
        let mut button = CopyButton::default();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(1500);

        button.press(&mut clipboard, "x", t0);
        button.press(&mut clipboard, "x", t1);

        assert_eq!(button.revert_at(t1), Some(t1 + COPY_FEEDBACK));
        // Past the first deadline, still inside the second
        assert!(button.is_copied(t0 + Duration::from_millis(2500)));
        assert!(!button.is_copied(t1 + COPY_FEEDBACK));
        assert_eq!(button.revert_at(t1 + COPY_FEEDBACK), None);
    }

    #[test]
    fn test_no_revert_pending_before_press() {
        let button = CopyButton::default();
        assert_eq!(button.revert_at(Instant::now()), None);
    }

    #[test]
    fn test_clipboard_failure_is_ignored() {
        let mut clipboard = MemoryClipboard::unavailable();
        let mut button = CopyButton::default();
        let t0 = Instant::now();

        button.press(&mut clipboard, "x", t0);

        assert_eq!(clipboard.contents(), None);
        assert!(button.is_copied(t0));
    }

    #[test]
    fn test_panel_view_carries_feedback_duration() {
        let view = CodePanelView::new("import pandas as pd");
        assert_eq!(view.feedback_ms, 2000);
        assert_eq!(view.idle_label, "Copiar");
    }
}
