//! Icon button widget implementation.
//!
//! This module provides [`IconButton`], a stateless button that shows a
//! single fixed icon and reports clicks. It carries no payload and exposes
//! no internal state beyond whether it is disabled.
//!
//! # Example
//!
//! ```
//! use trellis::widget::widgets::IconButton;
//!
//! let button = IconButton::chevron_down();
//! button.clicked.connect(|_| {
//!     println!("Toggle the list");
//! });
//! button.click();
//! ```

use serde::{Deserialize, Serialize};
use trellis_core::Signal;
use trellis_core::logging::targets;

use crate::widget::Widget;

/// The fixed glyph an [`IconButton`] displays.
///
/// The rendering layer maps each kind to its artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Sliders glyph, used to open adjustment or filter panels.
    Adjust,
    /// Downward chevron, used to open and close drop lists.
    ChevronDown,
}

impl IconKind {
    /// Stable identifier for the glyph, e.g. for test hooks or asset lookup.
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Adjust => "adjust-icon",
            IconKind::ChevronDown => "chevrondown-icon",
        }
    }
}

/// Input events understood by [`IconButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconButtonEvent {
    /// The button was activated by pointer or keyboard.
    Clicked,
}

/// A stateless button showing a single icon.
///
/// # Signals
///
/// - `clicked()`: Emitted when the button is activated while enabled
pub struct IconButton {
    icon: IconKind,
    disabled: bool,

    /// Signal emitted when the button is clicked.
    pub clicked: Signal<()>,
}

impl IconButton {
    /// Create a button showing `icon`.
    pub fn new(icon: IconKind) -> Self {
        Self {
            icon,
            disabled: false,
            clicked: Signal::new(),
        }
    }

    /// Button with the adjust (sliders) icon.
    pub fn adjust() -> Self {
        Self::new(IconKind::Adjust)
    }

    /// Button with the chevron-down icon.
    pub fn chevron_down() -> Self {
        Self::new(IconKind::ChevronDown)
    }

    /// The icon this button displays.
    pub fn icon(&self) -> IconKind {
        self.icon
    }

    /// Set whether the button ignores clicks.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Set disabled state using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Programmatically click the button.
    ///
    /// Emits `clicked` unless the button is disabled. Returns whether the
    /// signal was emitted.
    pub fn click(&self) -> bool {
        if self.disabled {
            tracing::trace!(target: targets::ICON_BUTTON, icon = self.icon.name(), "click ignored, button disabled");
            return false;
        }

        tracing::trace!(target: targets::ICON_BUTTON, icon = self.icon.name(), "clicked");
        self.clicked.emit(());
        true
    }
}

impl std::fmt::Debug for IconButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconButton")
            .field("icon", &self.icon)
            .field("disabled", &self.disabled)
            .finish()
    }
}

impl Widget for IconButton {
    type Event = IconButtonEvent;

    fn event(&mut self, event: IconButtonEvent) -> bool {
        match event {
            IconButtonEvent::Clicked => self.click(),
        }
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}
