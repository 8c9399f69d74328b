//! Widget configuration.
//!
//! Hosts can build configuration in code with the `with_*` builders, or
//! describe it in TOML:
//!
//! ```toml
//! [combo_box]
//! mode = "multiple"
//! placeholder = "Pick tags"
//! max_list_height = 240
//! deselect_on_reselect = true
//!
//! [line_edit]
//! input_type = "password"
//!
//! [modal]
//! close_on_backdrop = true
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use trellis_core::logging::targets;

use crate::error::{Error, Result};
use crate::widget::CaseSensitivity;
use crate::widget::widgets::{InputType, Mode};

/// Configuration for a [`ComboBox`](crate::widget::widgets::ComboBox).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboBoxConfig {
    /// Selection semantics, fixed at construction.
    pub mode: Mode,
    /// Text shown while the input is empty.
    pub placeholder: String,
    /// Whether user input is ignored.
    pub disabled: bool,
    /// Cap on the rendered list height, in host units. Not interpreted.
    pub max_list_height: Option<u32>,
    /// Close the list after a selection in single/search mode.
    pub close_on_select: bool,
    /// Open the list when non-empty text is typed.
    pub open_on_input: bool,
    /// In multiple mode, clicking a selected option removes it.
    pub deselect_on_reselect: bool,
    /// How option filtering treats letter case.
    pub case_sensitivity: CaseSensitivity,
}

impl Default for ComboBoxConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Single,
            placeholder: String::new(),
            disabled: false,
            max_list_height: None,
            close_on_select: true,
            open_on_input: true,
            deselect_on_reselect: false,
            case_sensitivity: CaseSensitivity::CaseInsensitive,
        }
    }
}

impl ComboBoxConfig {
    /// Default configuration with the given mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set disabled using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set max list height using builder pattern.
    pub fn with_max_list_height(mut self, height: u32) -> Self {
        self.max_list_height = Some(height);
        self
    }

    /// Set close-on-select using builder pattern.
    pub fn with_close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    /// Set open-on-input using builder pattern.
    pub fn with_open_on_input(mut self, open: bool) -> Self {
        self.open_on_input = open;
        self
    }

    /// Set deselect-on-reselect using builder pattern.
    pub fn with_deselect_on_reselect(mut self, deselect: bool) -> Self {
        self.deselect_on_reselect = deselect;
        self
    }

    /// Set case sensitivity using builder pattern.
    pub fn with_case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }
}

/// Configuration for a [`LineEdit`](crate::widget::widgets::LineEdit).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineEditConfig {
    /// The kind of text the input holds.
    pub input_type: InputType,
    /// Text shown while the input is empty.
    pub placeholder: String,
    /// Whether user input is ignored.
    pub disabled: bool,
}

impl LineEditConfig {
    /// Set input type using builder pattern.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set disabled using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Configuration for a [`Modal`](crate::widget::widgets::Modal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Escape asks the owner to close the modal.
    pub close_on_escape: bool,
    /// Clicking the backdrop asks the owner to close the modal.
    pub close_on_backdrop: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            close_on_escape: true,
            close_on_backdrop: false,
        }
    }
}

/// Configuration for every widget kind, as loaded from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Combobox settings.
    pub combo_box: ComboBoxConfig,
    /// Single-line input settings.
    pub line_edit: LineEditConfig,
    /// Modal settings.
    pub modal: ModalConfig,
}

impl WidgetConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        tracing::debug!(target: targets::CONFIG, mode = %config.combo_box.mode, "parsed widget configuration");
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading widget configuration");
        Self::from_toml_str(&content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.combo_box.mode, Mode::Single);
        assert!(config.combo_box.close_on_select);
        assert!(config.combo_box.open_on_input);
        assert!(!config.combo_box.deselect_on_reselect);
        assert_eq!(
            config.combo_box.case_sensitivity,
            CaseSensitivity::CaseInsensitive
        );
        assert_eq!(config.line_edit.input_type, InputType::Text);
        assert!(config.modal.close_on_escape);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = WidgetConfig::from_toml_str("").unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = WidgetConfig::from_toml_str(
            r#"
            [combo_box]
            mode = "Multiple"
            placeholder = "Pick tags"
            max_list_height = 500
            deselect_on_reselect = true
            case_sensitivity = "case_sensitive"

            [line_edit]
            input_type = "password"
            disabled = true

            [modal]
            close_on_backdrop = true
            "#,
        )
        .unwrap();

        assert_eq!(config.combo_box.mode, Mode::Multiple);
        assert_eq!(config.combo_box.placeholder, "Pick tags");
        assert_eq!(config.combo_box.max_list_height, Some(500));
        assert!(config.combo_box.deselect_on_reselect);
        assert_eq!(
            config.combo_box.case_sensitivity,
            CaseSensitivity::CaseSensitive
        );
        assert_eq!(config.line_edit.input_type, InputType::Password);
        assert!(config.line_edit.disabled);
        assert!(config.modal.close_on_backdrop);
        assert!(config.modal.close_on_escape);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = WidgetConfig::from_toml_str("[combo_box]\nmode = \"dual\"").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("dual"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[combo_box]\nmode = \"search\"").unwrap();

        let config = WidgetConfig::load(file.path()).unwrap();
        assert_eq!(config.combo_box.mode, Mode::Search);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WidgetConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = WidgetConfig {
            combo_box: ComboBoxConfig::default()
                .with_mode(Mode::Multiple)
                .with_max_list_height(240),
            ..Default::default()
        };

        let text = config.to_toml_string().unwrap();
        assert_eq!(WidgetConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_builders() {
        let config = ComboBoxConfig::default()
            .with_mode(Mode::Search)
            .with_placeholder("Find")
            .with_disabled(true)
            .with_close_on_select(false)
            .with_open_on_input(false)
            .with_deselect_on_reselect(true)
            .with_case_sensitivity(CaseSensitivity::CaseSensitive);

        assert_eq!(config.mode, Mode::Search);
        assert_eq!(config.placeholder, "Find");
        assert!(config.disabled);
        assert!(!config.close_on_select);
        assert!(!config.open_on_input);
        assert!(config.deselect_on_reselect);

        let line = LineEditConfig::default()
            .with_input_type(InputType::Email)
            .with_placeholder("you@example.com");
        assert_eq!(line.input_type, InputType::Email);
        assert_eq!(line.placeholder, "you@example.com");
    }
}
