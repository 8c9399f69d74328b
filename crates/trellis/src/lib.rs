//! Trellis - headless form widgets.
//!
//! Trellis provides UI-framework-independent controllers for form controls:
//! a filtered combobox with single, multiple and search modes, a single-line
//! input with clear and password toggles, a modal dialog frame and icon
//! buttons. Controllers own their state and report changes through
//! [`Signal`]s; rendering is left to the host.
//!
//! # Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut tags = ComboBox::with_mode(Mode::Multiple).with_options(["bar", "foo"]);
//!
//! tags.value_changed.connect(|value| {
//!     println!("Tags: {:?}", value);
//! });
//!
//! tags.event(ComboBoxEvent::OptionClicked("bar".into()));
//! tags.event(ComboBoxEvent::OptionClicked("foo".into()));
//! assert_eq!(tags.model_value(), &ModelValue::from(["bar", "foo"]));
//! ```

pub use trellis_core::*;

pub mod config;
pub mod error;
pub mod prelude;
pub mod widget;

pub use config::{ComboBoxConfig, LineEditConfig, ModalConfig, WidgetConfig};
pub use error::{Error, Result};
