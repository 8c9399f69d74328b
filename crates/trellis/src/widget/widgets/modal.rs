//! Modal dialog implementation.
//!
//! This module provides [`Modal`], a dialog frame with a header, a content
//! area and a close control. The modal does not track its own visibility:
//! it only asks to be closed through `close_requested`, and the owner decides
//! whether to hide or drop it.
//!
//! # Example
//!
//! ```
//! use trellis::widget::Widget;
//! use trellis::widget::widgets::{Modal, ModalEvent};
//!
//! let mut modal = Modal::new("Delete file").with_content("This cannot be undone.");
//!
//! modal.close_requested.connect(|_| {
//!     println!("Owner hides the modal");
//! });
//!
//! modal.event(ModalEvent::CloseClicked);
//! ```

use trellis_core::Signal;
use trellis_core::logging::targets;

use crate::config::ModalConfig;
use crate::widget::Widget;

/// Why the modal asked to be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The close control in the header was activated.
    CloseButton,
    /// Escape was pressed while the modal had focus.
    Escape,
    /// The backdrop around the modal was clicked.
    Backdrop,
}

/// Input events understood by [`Modal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// The close control was clicked.
    CloseClicked,
    /// Escape was pressed.
    EscapePressed,
    /// The backdrop outside the dialog frame was clicked.
    BackdropClicked,
}

/// A modal dialog frame.
///
/// # Signals
///
/// - `close_requested()`: Emitted when the user asks to close the modal
/// - `close_reason(CloseReason)`: Emitted alongside, carrying the trigger
pub struct Modal {
    title: String,
    content: String,
    config: ModalConfig,

    /// Signal emitted when the modal asks its owner to close it.
    pub close_requested: Signal<()>,
    /// Signal emitted with the trigger of each close request.
    pub close_reason: Signal<CloseReason>,
}

impl Modal {
    /// Create a modal with the given header title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            config: ModalConfig::default(),
            close_requested: Signal::new(),
            close_reason: Signal::new(),
        }
    }

    /// Create a modal from configuration.
    pub fn from_config(title: impl Into<String>, config: ModalConfig) -> Self {
        Self::new(title).with_config(config)
    }

    /// Set content using builder pattern.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set configuration using builder pattern.
    pub fn with_config(mut self, config: ModalConfig) -> Self {
        self.config = config;
        self
    }

    /// The header title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the header title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The body content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set the body content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// The active configuration.
    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Ask the owner to close the modal.
    ///
    /// This is what the close control does when activated.
    pub fn request_close(&self) {
        self.emit_close(CloseReason::CloseButton);
    }

    fn emit_close(&self, reason: CloseReason) {
        tracing::debug!(target: targets::MODAL, title = %self.title, ?reason, "close requested");
        self.close_reason.emit(reason);
        self.close_requested.emit(());
    }
}

impl std::fmt::Debug for Modal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modal")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("config", &self.config)
            .finish()
    }
}

impl Widget for Modal {
    type Event = ModalEvent;

    fn event(&mut self, event: ModalEvent) -> bool {
        match event {
            ModalEvent::CloseClicked => {
                self.emit_close(CloseReason::CloseButton);
                true
            }
            ModalEvent::EscapePressed if self.config.close_on_escape => {
                self.emit_close(CloseReason::Escape);
                true
            }
            ModalEvent::BackdropClicked if self.config.close_on_backdrop => {
                self.emit_close(CloseReason::Backdrop);
                true
            }
            ModalEvent::EscapePressed | ModalEvent::BackdropClicked => false,
        }
    }

    fn is_disabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn record_reasons(modal: &Modal) -> Arc<Mutex<Vec<CloseReason>>> {
        let reasons = Arc::new(Mutex::new(Vec::new()));
        let reasons_clone = reasons.clone();
        modal.close_reason.connect(move |reason| {
            reasons_clone.lock().push(*reason);
        });
        reasons
    }

    #[test]
    fn test_modal_creation() {
        let modal = Modal::new("Header").with_content("Body");
        assert_eq!(modal.title(), "Header");
        assert_eq!(modal.content(), "Body");
        assert!(modal.config().close_on_escape);
        assert!(!modal.config().close_on_backdrop);
    }

    #[test]
    fn test_close_click_emits_close() {
        let mut modal = Modal::new("Header");
        let closed = Arc::new(Mutex::new(0));

        let closed_clone = closed.clone();
        modal.close_requested.connect(move |_| {
            *closed_clone.lock() += 1;
        });

        assert!(modal.event(ModalEvent::CloseClicked));
        assert_eq!(*closed.lock(), 1);
    }

    #[test]
    fn test_request_close() {
        let modal = Modal::new("Header");
        let reasons = record_reasons(&modal);

        modal.request_close();
        assert_eq!(*reasons.lock(), vec![CloseReason::CloseButton]);
    }

    #[test]
    fn test_escape_and_backdrop_follow_config() {
        let mut modal = Modal::new("Header");
        let reasons = record_reasons(&modal);

        assert!(modal.event(ModalEvent::EscapePressed));
        assert!(!modal.event(ModalEvent::BackdropClicked));
        assert_eq!(*reasons.lock(), vec![CloseReason::Escape]);

        let mut modal = Modal::new("Header").with_config(ModalConfig {
            close_on_escape: false,
            close_on_backdrop: true,
        });
        let reasons = record_reasons(&modal);

        assert!(!modal.event(ModalEvent::EscapePressed));
        assert!(modal.event(ModalEvent::BackdropClicked));
        assert_eq!(*reasons.lock(), vec![CloseReason::Backdrop]);
    }

    #[test]
    fn test_repeated_close_requests_all_emit() {
        // The owner may ignore a request, so every click asks again.
        let mut modal = Modal::new("Header");
        let reasons = record_reasons(&modal);

        modal.event(ModalEvent::CloseClicked);
        modal.event(ModalEvent::CloseClicked);
        assert_eq!(reasons.lock().len(), 2);
    }
}
