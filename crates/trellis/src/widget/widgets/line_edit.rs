//! Single-line text input widget.
//!
//! The LineEdit controller provides:
//! - Text, password, email, number and search input types
//! - Placeholder text
//! - A clear affordance shown while text is present
//! - A show/hide toggle for password inputs
//!
//! # Example
//!
//! ```
//! use trellis::widget::Widget;
//! use trellis::widget::widgets::{InputType, LineEdit, LineEditEvent, PasswordIcon};
//!
//! let mut password = LineEdit::new()
//!     .with_input_type(InputType::Password)
//!     .with_placeholder("Password");
//!
//! password.value_changed.connect(|text| {
//!     println!("Text changed: {}", text);
//! });
//!
//! password.event(LineEditEvent::TextEdited("hunter2".into()));
//! assert_eq!(password.display_text(), "•••••••");
//!
//! password.event(LineEditEvent::PasswordToggleClicked);
//! assert_eq!(password.effective_input_type(), InputType::Text);
//! assert_eq!(password.password_icon(), PasswordIcon::OpenEye);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use trellis_core::Signal;
use trellis_core::logging::targets;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::LineEditConfig;
use crate::error::Error;
use crate::widget::Widget;

/// The kind of text a [`LineEdit`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InputType {
    /// Free text (default).
    #[default]
    Text,
    /// Secret text, masked unless revealed.
    Password,
    /// An email address.
    Email,
    /// A number.
    Number,
    /// A search query.
    Search,
}

impl InputType {
    /// The lowercase name of the input type.
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Search => "search",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(InputType::Text),
            "password" => Ok(InputType::Password),
            "email" => Ok(InputType::Email),
            "number" => Ok(InputType::Number),
            "search" => Ok(InputType::Search),
            _ => Err(Error::InvalidInputType(s.to_string())),
        }
    }
}

impl TryFrom<String> for InputType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InputType> for String {
    fn from(input_type: InputType) -> Self {
        input_type.as_str().to_string()
    }
}

/// Echo mode determines how text is displayed in the LineEdit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EchoMode {
    /// Display characters as entered (default).
    #[default]
    Normal,
    /// Display a mask character instead of actual text.
    Password,
}

/// The eye glyph on a password input's visibility toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordIcon {
    /// Shown while the text is masked.
    ClosedEye,
    /// Shown while the text is revealed.
    OpenEye,
}

impl PasswordIcon {
    /// Stable identifier for the glyph.
    pub fn name(self) -> &'static str {
        match self {
            PasswordIcon::ClosedEye => "closedeye-icon",
            PasswordIcon::OpenEye => "openeye-icon",
        }
    }
}

/// Input events understood by [`LineEdit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEditEvent {
    /// The user changed the text.
    TextEdited(String),
    /// The clear icon was clicked.
    ClearClicked,
    /// The password visibility toggle was clicked.
    PasswordToggleClicked,
}

/// A single-line text input controller.
///
/// # Signals
///
/// - `value_changed(String)`: Emitted when the user changes the text
/// - `password_visibility_changed(bool)`: Emitted when a password is revealed
///   or masked again
pub struct LineEdit {
    /// The current text.
    text: String,

    /// Placeholder text shown when empty.
    placeholder: String,

    /// The declared input type.
    input_type: InputType,

    /// Whether a password input currently shows its text.
    password_revealed: bool,

    /// Character used to mask each grapheme.
    password_char: char,

    /// Whether host input is ignored.
    disabled: bool,

    // Signals
    /// Signal emitted when the user changes the text.
    pub value_changed: Signal<String>,
    /// Signal emitted when password visibility flips.
    pub password_visibility_changed: Signal<bool>,
}

impl LineEdit {
    /// Create a new, empty text input.
    pub fn new() -> Self {
        Self::from_config(LineEditConfig::default())
    }

    /// Create a LineEdit from configuration.
    pub fn from_config(config: LineEditConfig) -> Self {
        Self {
            text: String::new(),
            placeholder: config.placeholder,
            input_type: config.input_type,
            password_revealed: false,
            password_char: '•',
            disabled: config.disabled,
            value_changed: Signal::new(),
            password_visibility_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, as if typed by the user, and report it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        tracing::trace!(target: targets::LINE_EDIT, len = self.text.len(), "text edited");
        self.value_changed.emit(self.text.clone());
    }

    /// Apply text pushed by the owner without reporting it back.
    pub fn set_model_value(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set the initial text using builder pattern.
    pub fn with_model_value(mut self, text: impl Into<String>) -> Self {
        self.set_model_value(text);
        self
    }

    /// Clear all text and report the empty value.
    pub fn clear(&mut self) {
        self.text.clear();
        tracing::debug!(target: targets::LINE_EDIT, "cleared");
        self.value_changed.emit(String::new());
    }

    /// Whether the clear icon should be shown.
    pub fn clear_icon_visible(&self) -> bool {
        !self.text.is_empty()
    }

    /// Get the text as it should be displayed.
    ///
    /// Masked inputs show one mask character per grapheme, so combined
    /// characters and emoji count once.
    pub fn display_text(&self) -> String {
        match self.echo_mode() {
            EchoMode::Normal => self.text.clone(),
            EchoMode::Password => self
                .password_char
                .to_string()
                .repeat(self.text.graphemes(true).count()),
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.set_placeholder(text);
        self
    }

    /// Get the declared input type.
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Set the declared input type.
    ///
    /// Any revealed password is masked again.
    pub fn set_input_type(&mut self, input_type: InputType) {
        self.input_type = input_type;
        if self.password_revealed {
            self.password_revealed = false;
            self.password_visibility_changed.emit(false);
        }
    }

    /// Set input type using builder pattern.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.set_input_type(input_type);
        self
    }

    /// Get the mask character.
    pub fn password_char(&self) -> char {
        self.password_char
    }

    /// Set the mask character.
    pub fn set_password_char(&mut self, ch: char) {
        self.password_char = ch;
    }

    /// Set whether host input is ignored.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Set disabled using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // =========================================================================
    // Password Visibility
    // =========================================================================

    /// Whether a password input currently shows its text.
    pub fn is_password_revealed(&self) -> bool {
        self.password_revealed
    }

    /// Whether the password visibility toggle should be shown.
    pub fn password_toggle_visible(&self) -> bool {
        self.input_type == InputType::Password && !self.text.is_empty()
    }

    /// Reveal a masked password, or mask a revealed one.
    ///
    /// Has no effect on inputs that are not passwords.
    pub fn toggle_password_visibility(&mut self) {
        if self.input_type != InputType::Password {
            tracing::trace!(target: targets::LINE_EDIT, input_type = %self.input_type, "visibility toggle ignored");
            return;
        }

        self.password_revealed = !self.password_revealed;
        tracing::debug!(target: targets::LINE_EDIT, revealed = self.password_revealed, "password visibility toggled");
        self.password_visibility_changed.emit(self.password_revealed);
    }

    /// The input type the rendered field should use.
    ///
    /// A revealed password renders as plain text.
    pub fn effective_input_type(&self) -> InputType {
        match self.input_type {
            InputType::Password if self.password_revealed => InputType::Text,
            other => other,
        }
    }

    /// How the text is echoed.
    pub fn echo_mode(&self) -> EchoMode {
        if self.effective_input_type() == InputType::Password {
            EchoMode::Password
        } else {
            EchoMode::Normal
        }
    }

    /// The glyph on the visibility toggle.
    pub fn password_icon(&self) -> PasswordIcon {
        if self.password_revealed {
            PasswordIcon::OpenEye
        } else {
            PasswordIcon::ClosedEye
        }
    }
}

impl Default for LineEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEdit")
            .field("display_text", &self.display_text())
            .field("placeholder", &self.placeholder)
            .field("input_type", &self.input_type)
            .field("password_revealed", &self.password_revealed)
            .field("disabled", &self.disabled)
            .finish()
    }
}

impl Widget for LineEdit {
    type Event = LineEditEvent;

    fn event(&mut self, event: LineEditEvent) -> bool {
        if self.disabled {
            tracing::trace!(target: targets::LINE_EDIT, "event ignored, input disabled");
            return false;
        }

        match event {
            LineEditEvent::TextEdited(text) => {
                self.set_text(text);
                true
            }
            LineEditEvent::ClearClicked => {
                self.clear();
                true
            }
            LineEditEvent::PasswordToggleClicked => {
                if self.input_type == InputType::Password {
                    self.toggle_password_visibility();
                    true
                } else {
                    false
                }
            }
        }
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn record_values(edit: &LineEdit) -> Arc<Mutex<Vec<String>>> {
        let values = Arc::new(Mutex::new(Vec::new()));
        let values_clone = values.clone();
        edit.value_changed.connect(move |text| {
            values_clone.lock().push(text.clone());
        });
        values
    }

    #[test]
    fn test_line_edit_creation() {
        let edit = LineEdit::new();
        assert_eq!(edit.text(), "");
        assert_eq!(edit.placeholder(), "");
        assert_eq!(edit.input_type(), InputType::Text);
        assert_eq!(edit.echo_mode(), EchoMode::Normal);
        assert!(!edit.clear_icon_visible());
        assert!(edit.is_enabled());
    }

    #[test]
    fn test_input_type_parsing() {
        assert_eq!("Password".parse::<InputType>().unwrap(), InputType::Password);
        assert_eq!("email".parse::<InputType>().unwrap(), InputType::Email);
        assert!(matches!(
            "date".parse::<InputType>(),
            Err(Error::InvalidInputType(name)) if name == "date"
        ));
    }

    #[test]
    fn test_set_text_emits() {
        let mut edit = LineEdit::new();
        let values = record_values(&edit);

        edit.set_text("hello");
        assert_eq!(edit.text(), "hello");
        assert_eq!(*values.lock(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_set_model_value_does_not_emit() {
        let mut edit = LineEdit::new();
        let values = record_values(&edit);

        edit.set_model_value("from owner");
        assert_eq!(edit.text(), "from owner");
        assert!(values.lock().is_empty());
    }

    #[test]
    fn test_clear_emits_empty_string() {
        let mut edit = LineEdit::new().with_model_value("abc");
        let values = record_values(&edit);

        assert!(edit.clear_icon_visible());
        assert!(edit.event(LineEditEvent::ClearClicked));
        assert_eq!(edit.text(), "");
        assert_eq!(*values.lock(), vec![String::new()]);
        assert!(!edit.clear_icon_visible());
    }

    #[test]
    fn test_password_toggle_visibility() {
        let mut edit = LineEdit::new().with_input_type(InputType::Password);
        assert!(!edit.password_toggle_visible());

        edit.set_text("secret");
        assert!(edit.password_toggle_visible());
        assert_eq!(edit.effective_input_type(), InputType::Password);
        assert_eq!(edit.password_icon(), PasswordIcon::ClosedEye);
        assert_eq!(edit.display_text(), "••••••");

        edit.event(LineEditEvent::PasswordToggleClicked);
        assert_eq!(edit.effective_input_type(), InputType::Text);
        assert_eq!(edit.password_icon(), PasswordIcon::OpenEye);
        assert_eq!(edit.display_text(), "secret");

        edit.toggle_password_visibility();
        assert_eq!(edit.effective_input_type(), InputType::Password);
        assert_eq!(edit.password_icon().name(), "closedeye-icon");
    }

    #[test]
    fn test_password_toggle_ignored_for_text_input() {
        let mut edit = LineEdit::new().with_model_value("visible");
        assert!(!edit.password_toggle_visible());
        assert!(!edit.event(LineEditEvent::PasswordToggleClicked));
        assert!(!edit.is_password_revealed());
        assert_eq!(edit.effective_input_type(), InputType::Text);
    }

    #[test]
    fn test_mask_counts_graphemes() {
        let mut edit = LineEdit::new().with_input_type(InputType::Password);
        edit.set_password_char('*');

        // "e" + combining acute accent is one grapheme.
        edit.set_model_value("ae\u{0301}👍");
        assert_eq!(edit.display_text(), "***");
    }

    #[test]
    fn test_changing_input_type_masks_again() {
        let mut edit = LineEdit::new().with_input_type(InputType::Password);
        edit.set_model_value("pw");
        edit.toggle_password_visibility();
        assert!(edit.is_password_revealed());

        edit.set_input_type(InputType::Password);
        assert!(!edit.is_password_revealed());
    }

    #[test]
    fn test_changing_input_type_reports_masking() {
        let mut edit = LineEdit::new().with_input_type(InputType::Password);
        let changes = Arc::new(Mutex::new(Vec::new()));
        let changes_clone = changes.clone();
        edit.password_visibility_changed.connect(move |revealed| {
            changes_clone.lock().push(*revealed);
        });

        edit.toggle_password_visibility();
        edit.set_input_type(InputType::Text);
        edit.set_input_type(InputType::Password);

        assert_eq!(*changes.lock(), vec![true, false]);
        assert!(!edit.is_password_revealed());
    }

    #[test]
    fn test_disabled_ignores_events() {
        let mut edit = LineEdit::new().with_disabled(true);
        let values = record_values(&edit);

        assert!(!edit.event(LineEditEvent::TextEdited("x".into())));
        assert!(!edit.event(LineEditEvent::ClearClicked));
        assert_eq!(edit.text(), "");
        assert!(values.lock().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = LineEditConfig::default()
            .with_input_type(InputType::Email)
            .with_placeholder("you@example.com");
        let edit = LineEdit::from_config(config);

        assert_eq!(edit.input_type(), InputType::Email);
        assert_eq!(edit.placeholder(), "you@example.com");
    }
}
