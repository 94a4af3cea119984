use super::*;
use crate::config::{Config, SelectionPolicy};
use crate::units::TemperatureUnit::{self, Celsius, Fahrenheit, Kelvin, Reaumur};

fn filled(source: TemperatureUnit, target: TemperatureUnit, text: &str) -> FormController {
    let mut form = FormController::new();
    form.select_source_unit(source).unwrap();
    form.select_target_unit(target).unwrap();
    form.set_input_text(text);
    form
}

fn clear_other_form() -> FormController {
    let mut config = Config::empty();
    config.form.selection_policy = SelectionPolicy::ClearOther;
    FormController::with_config(&config)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_empty_submit_sets_all_flags() {
    let mut form = FormController::new();
    assert_eq!(form.phase(), FormPhase::Empty);

    let errors = form.submit().unwrap_err();
    assert!(errors.source_unit);
    assert!(errors.target_unit);
    assert!(errors.value);

    let state = form.state();
    assert!(state.source_unit_error());
    assert!(state.target_unit_error());
    assert!(state.value_error());
    assert!(state.last_result().is_none());
    assert_eq!(form.phase(), FormPhase::Error);
}

#[test]
fn test_celsius_to_fahrenheit() {
    let mut form = filled(Celsius, Fahrenheit, "100");
    assert_eq!(form.phase(), FormPhase::ValidReady);

    let result = form.submit().unwrap();
    assert_close(result.value, 212.0);
    assert_eq!(form.phase(), FormPhase::Resolved);
    assert_eq!(form.state().last_result(), Some(&result));
}

#[test]
fn test_fahrenheit_to_kelvin() {
    let mut form = filled(Fahrenheit, Kelvin, "32");
    assert_close(form.submit().unwrap().value, 273.0);
}

#[test]
fn test_kelvin_to_reaumur() {
    let mut form = filled(Kelvin, Reaumur, "373");
    assert_close(form.submit().unwrap().value, 80.0);
}

#[test]
fn test_zero_result_is_kept() {
    let mut form = filled(Fahrenheit, Celsius, "32");
    let result = form.submit().unwrap();
    assert_eq!(result.value, 0.0);
    assert!(form.state().last_result().is_some());
    assert!(form.share_text().is_some());
}

#[test]
fn test_only_missing_value_flagged() {
    let mut form = filled(Celsius, Kelvin, "");
    let errors = form.submit().unwrap_err();
    assert!(!errors.source_unit);
    assert!(!errors.target_unit);
    assert!(errors.value);
}

#[test]
fn test_only_missing_target_flagged() {
    let mut form = FormController::new();
    form.select_source_unit(Celsius).unwrap();
    form.set_input_text("10");
    let errors = form.submit().unwrap_err();
    assert!(!errors.source_unit);
    assert!(errors.target_unit);
    assert!(!errors.value);
}

#[test]
fn test_invalid_value_text_rejected() {
    for text in ["abc", "   ", "NaN", "inf", "1,000.5", "12..3"] {
        let mut form = filled(Celsius, Kelvin, text);
        let errors = form.submit().unwrap_err();
        assert!(errors.value, "text {:?} should be rejected", text);
        assert!(!errors.source_unit);
    }
}

#[test]
fn test_overflowing_result_flags_value() {
    let mut form = filled(Celsius, Fahrenheit, "1e308");
    assert!(!form.is_ready());

    let errors = form.submit().unwrap_err();
    assert!(errors.value);
    assert!(!errors.source_unit && !errors.target_unit);
    assert!(form.state().value_error());
    assert_eq!(form.state().last_result(), None);
    assert_eq!(form.phase(), FormPhase::Error);

    // Previous result survives, and the reverse direction stays finite
    form.set_input_text("100");
    form.submit().unwrap();
    form.set_input_text("1e308");
    assert!(form.submit().is_err());
    assert_close(form.state().last_result().unwrap().value, 212.0);

    let mut reverse = filled(Fahrenheit, Celsius, "1e308");
    assert!(reverse.submit().unwrap().value.is_finite());
}

#[test]
fn test_comma_decimal_and_whitespace_accepted() {
    let mut form = filled(Celsius, Kelvin, " 36,5 ");
    assert_close(form.submit().unwrap().value, 309.5);
    // Text is stored as typed
    assert_eq!(form.state().input_text(), " 36,5 ");
}

#[test]
fn test_failed_submit_keeps_previous_result() {
    let mut form = filled(Celsius, Fahrenheit, "100");
    let first = form.submit().unwrap();

    form.set_input_text("not a number");
    assert!(form.submit().is_err());
    assert_eq!(form.state().last_result(), Some(&first));
    assert_eq!(form.phase(), FormPhase::Error);
}

#[test]
fn test_successful_submit_clears_flags() {
    let mut form = FormController::new();
    assert!(form.submit().is_err());

    form.select_source_unit(Celsius).unwrap();
    form.select_target_unit(Reaumur).unwrap();
    form.set_input_text("50");
    // Flags persist through edits until the next submit
    assert_eq!(form.phase(), FormPhase::Error);

    form.submit().unwrap();
    assert!(form.state().errors().is_empty());
    assert_eq!(form.phase(), FormPhase::Resolved);
}

#[test]
fn test_edit_after_resolved_keeps_result() {
    let mut form = filled(Celsius, Fahrenheit, "100");
    let result = form.submit().unwrap();

    form.set_input_text("1");
    assert_eq!(form.phase(), FormPhase::ValidReady);
    assert_eq!(form.state().last_result(), Some(&result));

    form.clear_target_unit();
    assert_eq!(form.phase(), FormPhase::PartiallyFilled);
    assert_eq!(form.state().last_result(), Some(&result));
}

#[test]
fn test_resubmit_is_idempotent() {
    let mut form = filled(Reaumur, Fahrenheit, "20");
    let first = form.submit().unwrap();
    let second = form.submit().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_partially_filled_phase() {
    let mut form = FormController::new();
    form.set_input_text("12");
    assert_eq!(form.phase(), FormPhase::PartiallyFilled);
    form.select_source_unit(Kelvin).unwrap();
    assert_eq!(form.phase(), FormPhase::PartiallyFilled);
    form.select_target_unit(Celsius).unwrap();
    assert_eq!(form.phase(), FormPhase::ValidReady);
}

#[test]
fn test_reset_returns_to_empty_outcome() {
    let mut form = filled(Celsius, Fahrenheit, "100");
    form.submit().unwrap();

    form.reset();
    assert_eq!(form.phase(), FormPhase::Empty);
    assert_eq!(form.state(), &FormState::default());

    let errors = form.submit().unwrap_err();
    assert!(errors.source_unit && errors.target_unit && errors.value);
    assert!(form.state().last_result().is_none());
}

#[test]
fn test_options_exclude_other_selection() {
    let mut form = FormController::new();
    assert_eq!(form.source_options().len(), 4);
    assert_eq!(form.target_options().len(), 4);

    form.select_source_unit(Kelvin).unwrap();
    assert!(!form.target_options().contains(&Kelvin));
    assert_eq!(form.target_options().len(), 3);
    assert_eq!(form.source_options().len(), 4);

    form.select_target_unit(Celsius).unwrap();
    assert!(!form.source_options().contains(&Celsius));
    assert!(form.source_options().contains(&Kelvin));
}

#[test]
fn test_exclude_policy_rejects_collision() {
    let mut form = FormController::new();
    form.select_source_unit(Celsius).unwrap();

    let err = form.select_target_unit(Celsius).unwrap_err();
    assert_eq!(
        err,
        SelectionError::Collision {
            unit: Celsius,
            held_by: Picker::Source
        }
    );
    assert_eq!(form.state().target_unit(), None);
    assert_eq!(form.state().source_unit(), Some(Celsius));
}

#[test]
fn test_exclude_policy_rejects_collision_from_source() {
    let mut form = filled(Celsius, Kelvin, "1");
    assert!(form.select_source_unit(Kelvin).is_err());
    assert_eq!(form.state().source_unit(), Some(Celsius));
}

#[test]
fn test_clear_other_policy() {
    let mut form = clear_other_form();
    form.select_source_unit(Celsius).unwrap();
    form.select_target_unit(Kelvin).unwrap();

    form.select_source_unit(Kelvin).unwrap();
    assert_eq!(form.state().source_unit(), Some(Kelvin));
    assert_eq!(form.state().target_unit(), None);
}

#[test]
fn test_selectors_never_equal_after_any_sequence() {
    for mut form in [FormController::new(), clear_other_form()] {
        for (step, unit) in TemperatureUnit::ALL
            .iter()
            .cycle()
            .take(24)
            .enumerate()
        {
            let _ = if step % 3 == 0 {
                form.select_target_unit(*unit)
            } else {
                form.select_source_unit(*unit)
            };
            let state = form.state();
            if let (Some(a), Some(b)) = (state.source_unit(), state.target_unit()) {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn test_reselecting_same_unit_is_noop() {
    let mut form = filled(Celsius, Kelvin, "5");
    form.select_source_unit(Celsius).unwrap();
    assert_eq!(form.state().source_unit(), Some(Celsius));
    assert_eq!(form.state().target_unit(), Some(Kelvin));
}

#[test]
fn test_swap_units() {
    let mut form = filled(Celsius, Fahrenheit, "212");
    form.submit().unwrap();
    form.swap_units();
    assert_eq!(form.state().source_unit(), Some(Fahrenheit));
    assert_eq!(form.state().target_unit(), Some(Celsius));
    assert_eq!(form.phase(), FormPhase::ValidReady);
    assert_close(form.submit().unwrap().value, 100.0);
}

#[test]
fn test_share_text() {
    let mut form = filled(Celsius, Fahrenheit, "100");
    assert_eq!(form.share_text(), None);
    form.submit().unwrap();
    assert_eq!(form.share_text().unwrap(), "100.00 ° C = 212.00 ° F");
}

#[test]
fn test_state_serializes_for_host() {
    let mut form = filled(Kelvin, Reaumur, "373");
    form.submit().unwrap();
    let json = serde_json::to_value(form.state()).unwrap();
    assert_eq!(json["source_unit"], "kelvin");
    assert_eq!(json["target_unit"], "reaumur");
    assert_eq!(json["raw_input"], "373");
    assert_eq!(json["value_error"], false);
    assert_eq!(json["last_result"]["value"], 80.0);
}
