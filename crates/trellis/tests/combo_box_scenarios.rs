//! End-to-end scenarios driving widgets the way a host would.

use std::sync::Arc;

use parking_lot::Mutex;
use static_assertions::assert_impl_all;
use trellis::prelude::*;
use trellis::widget::widgets::{CloseReason, LeadingIcon, OptionView, PasswordIcon};

assert_impl_all!(ComboBox: Send, Sync);
assert_impl_all!(LineEdit: Send, Sync);
assert_impl_all!(Modal: Send, Sync);
assert_impl_all!(ComboBoxState: Send, Sync, Clone);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("trellis=trace,trellis_core=trace")
        .with_test_writer()
        .try_init();
}

fn record<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
    let values = Arc::new(Mutex::new(Vec::new()));
    let values_clone = values.clone();
    signal.connect(move |value: &T| {
        values_clone.lock().push(value.clone());
    });
    values
}

#[test]
fn test_single_mode_pick_from_open_list() {
    init_tracing();
    let mut combo = ComboBox::new().with_options(["bar", "foo"]);
    let values = record(&combo.value_changed);

    assert!(combo.event(ComboBoxEvent::ToggleClicked));
    assert!(combo.is_open());
    assert!(combo.event(ComboBoxEvent::OptionClicked("bar".into())));

    assert_eq!(*values.lock(), vec![ModelValue::from("bar")]);
    assert!(!combo.is_open());
    assert!(combo.clear_icon_visible());
}

#[test]
fn test_multiple_mode_collects_in_click_order() {
    init_tracing();
    let mut combo = ComboBox::with_mode(Mode::Multiple).with_options(["bar", "foo", "baz"]);
    let values = record(&combo.value_changed);

    combo.event(ComboBoxEvent::ToggleClicked);
    for option in ["baz", "bar", "foo"] {
        combo.event(ComboBoxEvent::OptionClicked(option.into()));
    }

    let values = values.lock();
    assert_eq!(values[1], ModelValue::from(["baz", "bar"]));
    assert_eq!(
        values.last(),
        Some(&ModelValue::from(["baz", "bar", "foo"]))
    );
    assert!(combo.is_open());
    assert_eq!(combo.leading_icon(), Some(LeadingIcon::Multiple));
}

#[test]
fn test_typing_filters_and_selecting_fills_input() {
    init_tracing();
    let mut combo = ComboBox::with_mode(Mode::Search).with_options(["bar", "foo"]);
    let states = record(&combo.state_changed);

    combo.event(ComboBoxEvent::TextEdited("f".into()));
    assert!(combo.is_open());
    assert_eq!(
        combo.option_views(),
        vec![OptionView {
            text: "foo",
            selected: false
        }]
    );

    combo.event(ComboBoxEvent::OptionClicked("foo".into()));
    assert_eq!(combo.text(), "foo");

    let states = states.lock();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1], combo.snapshot());
}

#[test]
fn test_outside_click_then_clear() {
    init_tracing();
    let mut combo = ComboBox::with_mode(Mode::Multiple)
        .with_options(["bar", "foo"])
        .with_model_value(["foo"]);
    let values = record(&combo.value_changed);
    let open = record(&combo.open_changed);

    combo.event(ComboBoxEvent::ToggleClicked);
    combo.event(ComboBoxEvent::OutsideInteraction);
    combo.event(ComboBoxEvent::ClearClicked);

    assert_eq!(*open.lock(), vec![true, false]);
    assert_eq!(*values.lock(), vec![ModelValue::Multiple(Vec::new())]);
    assert!(!combo.is_selected("foo"));
}

#[test]
fn test_widgets_from_loaded_config() {
    init_tracing();
    let config = WidgetConfig::from_toml_str(
        r#"
        [combo_box]
        mode = "multiple"
        deselect_on_reselect = true

        [line_edit]
        input_type = "password"

        [modal]
        close_on_escape = false
        "#,
    )
    .unwrap();

    let mut combo = ComboBox::from_config(config.combo_box).with_options(["bar"]);
    combo.select_option("bar");
    combo.select_option("bar");
    assert!(combo.model_value().is_empty());

    let mut password = LineEdit::from_config(config.line_edit);
    password.event(LineEditEvent::TextEdited("pw".into()));
    assert!(password.password_toggle_visible());
    password.event(LineEditEvent::PasswordToggleClicked);
    assert_eq!(password.effective_input_type(), InputType::Text);
    assert_eq!(password.password_icon(), PasswordIcon::OpenEye);

    let mut modal = Modal::from_config("Settings", config.modal);
    let reasons = record(&modal.close_reason);
    assert!(!modal.event(ModalEvent::EscapePressed));
    assert!(modal.event(ModalEvent::CloseClicked));
    assert_eq!(*reasons.lock(), vec![CloseReason::CloseButton]);
}

#[test]
fn test_line_edit_clear_reports_empty_text() {
    init_tracing();
    let mut edit = LineEdit::new();
    let values = record(&edit.value_changed);

    edit.event(LineEditEvent::TextEdited("query".into()));
    edit.event(LineEditEvent::ClearClicked);

    assert_eq!(*values.lock(), vec!["query".to_string(), String::new()]);
    assert!(!edit.clear_icon_visible());
}
