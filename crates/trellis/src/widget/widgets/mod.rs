//! Standard widgets for Trellis.
//!
//! This module provides the form controllers:
//!
//! - [`ComboBox`]: Filtered dropdown with single, multiple and search modes
//! - [`LineEdit`]: Single-line text input with clear and password toggles
//! - [`Modal`]: Dialog frame that asks its owner to close it
//! - [`IconButton`]: Stateless icon button

mod combo_box;
mod icon_button;
mod line_edit;
mod modal;

pub use combo_box::{
    ComboBox, ComboBoxEvent, ComboBoxState, LeadingIcon, Mode, ModelValue, OptionView,
};
pub use icon_button::{IconButton, IconButtonEvent, IconKind};
pub use line_edit::{EchoMode, InputType, LineEdit, LineEditEvent, PasswordIcon};
pub use modal::{CloseReason, Modal, ModalEvent};
