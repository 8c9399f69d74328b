//! Widget system for Trellis.
//!
//! Trellis widgets are headless controllers: each one owns the state of a
//! single control and reports changes through [`Signal`](trellis_core::Signal)s.
//! Painting, markup and icon artwork belong to the host's rendering layer,
//! which reads the controller's derived views (which affordances are visible,
//! which icon to show, which options carry a checkmark).
//!
//! # Input Routing
//!
//! Hosts translate raw input (clicks, key strokes, outside clicks) into the
//! widget's event type and hand it to [`Widget::event`]:
//!
//! ```
//! use trellis::widget::Widget;
//! use trellis::widget::widgets::{ComboBox, ComboBoxEvent};
//!
//! let mut combo = ComboBox::new().with_options(["bar", "foo"]);
//! combo.event(ComboBoxEvent::ToggleClicked);
//! assert!(combo.is_open());
//! ```

pub mod option_model;
pub mod widgets;

pub use option_model::{CaseSensitivity, OptionList};

/// The base trait for all Trellis widget controllers.
pub trait Widget {
    /// The input events this widget understands.
    type Event;

    /// Handle an input event from the host.
    ///
    /// Returns `true` if the event was consumed. Disabled widgets consume
    /// nothing.
    fn event(&mut self, event: Self::Event) -> bool;

    /// Whether user interaction is currently disabled.
    fn is_disabled(&self) -> bool;

    /// Whether the widget accepts user interaction.
    fn is_enabled(&self) -> bool {
        !self.is_disabled()
    }
}
