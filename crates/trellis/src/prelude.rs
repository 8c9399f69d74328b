//! Prelude module for Trellis.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use trellis::prelude::*;
//!
//! let combo = ComboBox::with_mode(Mode::Search).with_options(["bar", "foo"]);
//! assert!(combo.is_enabled());
//! ```
//!
//! This provides access to:
//! - Signal/slot system (`Signal`, `ConnectionId`)
//! - Widget foundation (`Widget`, `OptionList`)
//! - The form controllers and their events
//! - Configuration types

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{CaseSensitivity, OptionList, Widget};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    ComboBox, ComboBoxEvent, ComboBoxState, IconButton, IconKind, InputType, LineEdit,
    LineEditEvent, Modal, ModalEvent, Mode, ModelValue,
};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{ComboBoxConfig, LineEditConfig, ModalConfig, WidgetConfig};
