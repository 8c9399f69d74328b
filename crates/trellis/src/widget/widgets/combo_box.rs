//! ComboBox widget for filtered dropdown selection.
//!
//! The ComboBox controller provides:
//! - A text input that filters the option list by substring
//! - A drop list opened and closed by a chevron toggle button
//! - Single, multiple and search selection modes
//! - A clear affordance that resets input and selection
//!
//! The controller is headless: hosts render [`ComboBox::option_views`],
//! [`ComboBox::leading_icon`] and [`ComboBox::clear_icon_visible`], and feed
//! input back through [`Widget::event`].
//!
//! # Example
//!
//! ```
//! use trellis::widget::Widget;
//! use trellis::widget::widgets::{ComboBox, ComboBoxEvent, ModelValue};
//!
//! let mut combo = ComboBox::new().with_options(["bar", "foo"]);
//!
//! combo.value_changed.connect(|value| {
//!     println!("Selected: {:?}", value);
//! });
//!
//! combo.event(ComboBoxEvent::ToggleClicked);
//! combo.event(ComboBoxEvent::OptionClicked("bar".into()));
//!
//! assert_eq!(combo.model_value(), &ModelValue::from("bar"));
//! assert!(!combo.is_open());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use trellis_core::logging::{span_names, targets};
use trellis_core::{PerfSpan, Signal};

use crate::config::ComboBoxConfig;
use crate::error::Error;
use crate::widget::widgets::IconButton;
use crate::widget::{OptionList, Widget};

// ============================================================================
// Mode
// ============================================================================

/// Selection semantics of a [`ComboBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// One value; selecting replaces it and closes the list.
    #[default]
    Single,
    /// An ordered set of values; selecting appends and keeps the list open.
    Multiple,
    /// Like `Single`, shown with a search icon.
    Search,
}

impl Mode {
    /// The lowercase name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Single => "single",
            Mode::Multiple => "multiple",
            Mode::Search => "search",
        }
    }

    /// Whether the mode holds a list of values.
    pub fn is_multiple(self) -> bool {
        self == Mode::Multiple
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Mode::Single),
            "multiple" => Ok(Mode::Multiple),
            "search" => Ok(Mode::Search),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

// ============================================================================
// Model Value
// ============================================================================

/// The value a [`ComboBox`] reports to its owner.
///
/// `Single` and `Search` modes carry a plain string, `Multiple` mode an
/// ordered list without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelValue {
    /// A single string value.
    Single(String),
    /// An ordered set of string values.
    Multiple(Vec<String>),
}

impl ModelValue {
    /// The empty value for `mode`: `""` or `[]`.
    pub fn empty_for(mode: Mode) -> Self {
        if mode.is_multiple() {
            ModelValue::Multiple(Vec::new())
        } else {
            ModelValue::Single(String::new())
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            ModelValue::Single(value) => value.is_empty(),
            ModelValue::Multiple(values) => values.is_empty(),
        }
    }

    /// The string value, if this is a single value.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ModelValue::Single(value) => Some(value),
            ModelValue::Multiple(_) => None,
        }
    }

    /// The list of values, if this is a multiple value.
    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            ModelValue::Single(_) => None,
            ModelValue::Multiple(values) => Some(values),
        }
    }

    /// Whether `option` is part of the value.
    pub fn contains(&self, option: &str) -> bool {
        match self {
            ModelValue::Single(value) => !value.is_empty() && value == option,
            ModelValue::Multiple(values) => values.iter().any(|value| value == option),
        }
    }

    /// Reshape the value to fit `mode`, dropping duplicates.
    fn coerce(self, mode: Mode) -> Self {
        match (mode.is_multiple(), self) {
            (true, ModelValue::Single(value)) if value.is_empty() => ModelValue::Multiple(Vec::new()),
            (true, ModelValue::Single(value)) => ModelValue::Multiple(vec![value]),
            (true, ModelValue::Multiple(values)) => {
                let mut unique: Vec<String> = Vec::with_capacity(values.len());
                for value in values {
                    if !unique.contains(&value) {
                        unique.push(value);
                    }
                }
                ModelValue::Multiple(unique)
            }
            (false, ModelValue::Multiple(values)) => {
                ModelValue::Single(values.into_iter().next().unwrap_or_default())
            }
            (false, single) => single,
        }
    }
}

impl Default for ModelValue {
    fn default() -> Self {
        ModelValue::Single(String::new())
    }
}

impl From<&str> for ModelValue {
    fn from(value: &str) -> Self {
        ModelValue::Single(value.to_string())
    }
}

impl From<String> for ModelValue {
    fn from(value: String) -> Self {
        ModelValue::Single(value)
    }
}

impl From<Vec<String>> for ModelValue {
    fn from(values: Vec<String>) -> Self {
        ModelValue::Multiple(values)
    }
}

impl<const N: usize> From<[&str; N]> for ModelValue {
    fn from(values: [&str; N]) -> Self {
        ModelValue::Multiple(values.into_iter().map(String::from).collect())
    }
}

// ============================================================================
// Derived Views
// ============================================================================

/// An immutable snapshot of a [`ComboBox`]'s mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboBoxState {
    /// Whether the drop list is shown.
    pub is_open: bool,
    /// The text currently in the input.
    pub raw_text: String,
    /// The current selection.
    pub selection: ModelValue,
}

/// A filtered option paired with its checkmark state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionView<'a> {
    /// The option text.
    pub text: &'a str,
    /// Whether the option is part of the selection.
    pub selected: bool,
}

/// Icon shown before the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadingIcon {
    /// Magnifier glyph for search mode.
    Search,
    /// Stacked-items glyph for multiple mode.
    Multiple,
}

impl LeadingIcon {
    /// Stable identifier for the glyph.
    pub fn name(self) -> &'static str {
        match self {
            LeadingIcon::Search => "search-icon",
            LeadingIcon::Multiple => "multiple-icon",
        }
    }
}

/// Input events understood by [`ComboBox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboBoxEvent {
    /// The user changed the input text.
    TextEdited(String),
    /// The chevron toggle button was clicked.
    ToggleClicked,
    /// An entry in the drop list was clicked.
    OptionClicked(String),
    /// The clear icon was clicked.
    ClearClicked,
    /// The user clicked outside the control or it lost focus.
    OutsideInteraction,
}

// ============================================================================
// ComboBox Widget
// ============================================================================

/// A filtered dropdown selection controller.
///
/// The controller is `Closed` until the toggle button is clicked or text is
/// typed, and returns to `Closed` after a single selection or an outside
/// interaction. Every mutating operation updates all fields before any
/// signal fires.
///
/// # Signals
///
/// - `value_changed(ModelValue)`: Emitted when the user changes the value
/// - `open_changed(bool)`: Emitted when the drop list opens or closes
/// - `state_changed(ComboBoxState)`: Emitted once after every state mutation
pub struct ComboBox {
    /// Behavior settings, including the fixed mode.
    config: ComboBoxConfig,

    /// The caller-owned options.
    options: OptionList,

    /// Whether the drop list is shown.
    is_open: bool,

    /// The text currently in the input.
    raw_text: String,

    /// The current selection, always shaped for `config.mode`.
    selection: ModelValue,

    /// The chevron button that toggles the drop list.
    toggle_button: IconButton,

    // Signals
    /// Signal emitted when the user changes the value.
    pub value_changed: Signal<ModelValue>,
    /// Signal emitted when the drop list opens or closes.
    pub open_changed: Signal<bool>,
    /// Signal emitted after every state mutation.
    pub state_changed: Signal<ComboBoxState>,
}

impl ComboBox {
    /// Create a new single-mode ComboBox with default settings.
    pub fn new() -> Self {
        Self::from_config(ComboBoxConfig::default())
    }

    /// Create a ComboBox with the given mode and otherwise default settings.
    pub fn with_mode(mode: Mode) -> Self {
        Self::from_config(ComboBoxConfig::default().with_mode(mode))
    }

    /// Create a ComboBox from configuration.
    pub fn from_config(config: ComboBoxConfig) -> Self {
        let toggle_button = IconButton::chevron_down().with_disabled(config.disabled);
        Self {
            selection: ModelValue::empty_for(config.mode),
            config,
            options: OptionList::empty(),
            is_open: false,
            raw_text: String::new(),
            toggle_button,
            value_changed: Signal::new(),
            open_changed: Signal::new(),
            state_changed: Signal::new(),
        }
    }

    /// Set options using builder pattern.
    pub fn with_options(mut self, options: impl Into<OptionList>) -> Self {
        self.options = options.into();
        self
    }

    /// Set the initial value using builder pattern.
    pub fn with_model_value(mut self, value: impl Into<ModelValue>) -> Self {
        self.apply_model_value(value.into());
        self
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// The selection mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// The active configuration.
    pub fn config(&self) -> &ComboBoxConfig {
        &self.config
    }

    /// The option list.
    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Replace the option list.
    ///
    /// Selection and input text are left untouched, even if the selected
    /// values are no longer offered.
    pub fn set_options(&mut self, options: impl Into<OptionList>) {
        self.options = options.into();
        tracing::trace!(target: targets::COMBO_BOX, count = self.options.len(), "options replaced");
    }

    /// Whether the drop list is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The text currently in the input.
    pub fn text(&self) -> &str {
        &self.raw_text
    }

    /// The current selection.
    pub fn model_value(&self) -> &ModelValue {
        &self.selection
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.config.placeholder = text.into();
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.set_placeholder(text);
        self
    }

    /// Set whether host input is ignored.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        self.toggle_button.set_disabled(disabled);
    }

    /// Set disabled using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Cap on the rendered list height.
    pub fn max_list_height(&self) -> Option<u32> {
        self.config.max_list_height
    }

    /// Set the cap on the rendered list height.
    pub fn set_max_list_height(&mut self, height: Option<u32>) {
        self.config.max_list_height = height;
    }

    /// Set max list height using builder pattern.
    pub fn with_max_list_height(mut self, height: u32) -> Self {
        self.set_max_list_height(Some(height));
        self
    }

    /// The chevron button that toggles the drop list.
    ///
    /// Its `clicked` signal fires for every toggle routed through
    /// [`Widget::event`].
    pub fn toggle_button(&self) -> &IconButton {
        &self.toggle_button
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// The current state as an immutable snapshot.
    pub fn snapshot(&self) -> ComboBoxState {
        ComboBoxState {
            is_open: self.is_open,
            raw_text: self.raw_text.clone(),
            selection: self.selection.clone(),
        }
    }

    /// Options matching the input text, in list order.
    pub fn filtered_options(&self) -> Vec<&str> {
        let _span = PerfSpan::new("combo_box::filtered_options");
        self.options.filter(&self.raw_text, self.config.case_sensitivity)
    }

    /// Filtered options with their checkmark state.
    pub fn option_views(&self) -> Vec<OptionView<'_>> {
        self.filtered_options()
            .into_iter()
            .map(|text| OptionView {
                text,
                selected: self.is_selected(text),
            })
            .collect()
    }

    /// Whether `option` is part of the selection.
    pub fn is_selected(&self, option: &str) -> bool {
        self.selection.contains(option)
    }

    /// Whether the clear icon should be shown.
    pub fn clear_icon_visible(&self) -> bool {
        !self.raw_text.is_empty()
    }

    /// The icon shown before the input text, if any.
    pub fn leading_icon(&self) -> Option<LeadingIcon> {
        match self.config.mode {
            Mode::Single => None,
            Mode::Multiple => Some(LeadingIcon::Multiple),
            Mode::Search => Some(LeadingIcon::Search),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replace the input text, as if typed by the user.
    ///
    /// In single and search mode the text is reported as the new value. The
    /// selection itself is never changed. Non-empty text opens the list
    /// when `open_on_input` is set.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
        let opened =
            self.config.open_on_input && !self.raw_text.is_empty() && self.apply_open(true);

        let value = (!self.config.mode.is_multiple())
            .then(|| ModelValue::Single(self.raw_text.clone()));

        tracing::trace!(target: targets::COMBO_BOX, text = %self.raw_text, opened, "text edited");
        self.notify(value, opened);
    }

    /// Flip the drop list between open and closed.
    pub fn toggle_open(&mut self) {
        let open = !self.is_open;
        self.apply_open(open);
        self.notify(None, true);
    }

    /// Open the drop list.
    pub fn open(&mut self) {
        if self.apply_open(true) {
            self.notify(None, true);
        }
    }

    /// Close the drop list.
    pub fn close(&mut self) {
        if self.apply_open(false) {
            self.notify(None, true);
        }
    }

    /// Close the drop list in response to a click outside or lost focus.
    pub fn handle_outside_interaction(&mut self) {
        tracing::trace!(target: targets::COMBO_BOX, was_open = self.is_open, "outside interaction");
        self.close();
    }

    /// Select `option` as if clicked in the drop list.
    ///
    /// In single and search mode the option replaces the selection and the
    /// input text, and the list closes unless `close_on_select` is unset. In
    /// multiple mode the option is appended and the list stays open; an
    /// already selected option is kept, or removed when
    /// `deselect_on_reselect` is set. The full value is always emitted.
    pub fn select_option(&mut self, option: impl Into<String>) {
        let option = option.into();
        let mut closed = false;

        if self.config.mode.is_multiple() {
            let mut values = match std::mem::take(&mut self.selection) {
                ModelValue::Multiple(values) => values,
                ModelValue::Single(_) => Vec::new(),
            };

            if let Some(index) = values.iter().position(|value| *value == option) {
                if self.config.deselect_on_reselect {
                    values.remove(index);
                }
            } else {
                values.push(option);
            }

            self.selection = ModelValue::Multiple(values);
        } else {
            self.raw_text = option.clone();
            self.selection = ModelValue::Single(option);
            if self.config.close_on_select {
                closed = self.apply_open(false);
            }
        }

        tracing::debug!(target: targets::COMBO_BOX, selection = ?self.selection, "option selected");
        self.notify(Some(self.selection.clone()), closed);
    }

    /// Reset input text and selection, reporting the empty value.
    ///
    /// The empty value is emitted even if nothing was selected.
    pub fn clear(&mut self) {
        self.raw_text.clear();
        self.selection = ModelValue::empty_for(self.config.mode);

        tracing::debug!(target: targets::COMBO_BOX, mode = %self.config.mode, "cleared");
        self.notify(Some(self.selection.clone()), false);
    }

    /// Apply a value pushed by the owner.
    ///
    /// The value is reshaped to fit the mode and is not echoed back through
    /// `value_changed`. In single and search mode the input text follows.
    /// The open state is left alone, so an owner echoing a selection back
    /// does not reopen the list; typed input opening the list goes through
    /// [`set_text`](Self::set_text) or [`ComboBoxEvent::TextEdited`].
    pub fn set_model_value(&mut self, value: impl Into<ModelValue>) {
        self.apply_model_value(value.into());
        self.notify(None, false);
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn apply_model_value(&mut self, value: ModelValue) {
        self.selection = value.coerce(self.config.mode);
        if let ModelValue::Single(text) = &self.selection {
            self.raw_text = text.clone();
        }
    }

    /// Set `is_open`, returning whether it changed.
    fn apply_open(&mut self, open: bool) -> bool {
        if self.is_open == open {
            return false;
        }
        self.is_open = open;
        tracing::trace!(target: targets::COMBO_BOX, open, "open state changed");
        true
    }

    /// Fire signals for a completed mutation.
    fn notify(&self, value: Option<ModelValue>, open_changed: bool) {
        if let Some(value) = value {
            self.value_changed.emit(value);
        }
        if open_changed {
            self.open_changed.emit(self.is_open);
        }
        self.state_changed.emit(self.snapshot());
    }
}

impl Default for ComboBox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComboBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboBox")
            .field("config", &self.config)
            .field("options", &self.options)
            .field("is_open", &self.is_open)
            .field("raw_text", &self.raw_text)
            .field("selection", &self.selection)
            .finish()
    }
}

impl Widget for ComboBox {
    type Event = ComboBoxEvent;

    fn event(&mut self, event: ComboBoxEvent) -> bool {
        let _span = tracing::trace_span!(target: targets::COMBO_BOX, span_names::EVENT, ?event).entered();

        // Outside interaction still closes a list left open when disabled.
        if self.config.disabled && event != ComboBoxEvent::OutsideInteraction {
            tracing::trace!(target: targets::COMBO_BOX, "event ignored, combobox disabled");
            return false;
        }

        match event {
            ComboBoxEvent::TextEdited(text) => {
                self.set_text(text);
                true
            }
            ComboBoxEvent::ToggleClicked => {
                if self.toggle_button.click() {
                    self.toggle_open();
                    true
                } else {
                    false
                }
            }
            ComboBoxEvent::OptionClicked(option) => {
                self.select_option(option);
                true
            }
            ComboBoxEvent::ClearClicked => {
                self.clear();
                true
            }
            ComboBoxEvent::OutsideInteraction => {
                let was_open = self.is_open;
                self.handle_outside_interaction();
                was_open
            }
        }
    }

    fn is_disabled(&self) -> bool {
        self.config.disabled
    }
}
