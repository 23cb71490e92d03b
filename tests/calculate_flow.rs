//! End-to-end reducer tests: drive the app through calculate / reset /
//! toggle sequences the way the event loop does, and assert on the
//! resulting state.

use bmical::core::action::{Action, Effect, update};
use bmical::core::bmi::{Category, ValidationError, health_tip};
use bmical::core::state::App;

fn calculate(height: &str, weight: &str) -> Action {
    Action::Calculate {
        height: height.to_string(),
        weight: weight.to_string(),
    }
}

#[test]
fn normal_measurement_produces_full_result() {
    let mut app = App::new();
    update(&mut app, calculate("170", "65"));

    let result = app.result.as_ref().expect("result should be produced");
    assert_eq!(result.bmi, 22.5);
    assert_eq!(result.category.label, Category::Normal);
    assert_eq!((result.ideal_min, result.ideal_max), (53.5, 66.5));
    assert_eq!(result.height_cm, 170.0);
    assert_eq!(result.weight_kg, 65.0);
    assert!(health_tip(result.category.label).is_none());
}

#[test]
fn underweight_measurement_selects_nutrition_tip() {
    let mut app = App::new();
    update(&mut app, calculate("160", "45"));

    let result = app.result.as_ref().unwrap();
    assert_eq!(result.bmi, 17.6);
    assert_eq!(result.category.label, Category::Underweight);
    assert!(health_tip(result.category.label).unwrap().contains("영양"));
}

#[test]
fn obese_measurement_selects_exercise_tip() {
    let mut app = App::new();
    update(&mut app, calculate("180", "95"));

    let result = app.result.as_ref().unwrap();
    assert_eq!(result.bmi, 29.3);
    assert_eq!(result.category.label, Category::Obese);
    assert!(health_tip(result.category.label).unwrap().contains("운동"));
}

#[test]
fn out_of_range_height_is_rejected_without_result() {
    let mut app = App::new();
    update(&mut app, calculate("30", "70"));

    assert!(app.result.is_none());
    assert_eq!(app.notice, Some(ValidationError::HeightOutOfRange));
}

#[test]
fn out_of_range_weight_is_rejected_without_result() {
    let mut app = App::new();
    update(&mut app, calculate("170", "500"));

    assert!(app.result.is_none());
    assert_eq!(app.notice, Some(ValidationError::WeightOutOfRange));
}

#[test]
fn rejected_calculation_leaves_previous_result_visible() {
    let mut app = App::new();
    update(&mut app, calculate("170", "65"));
    let before = app.result.clone();

    update(&mut app, calculate("170", "500"));
    assert_eq!(app.result, before);
    assert_eq!(app.notice, Some(ValidationError::WeightOutOfRange));

    // Dismissing the notice keeps the old result too.
    update(&mut app, Action::DismissNotice);
    assert_eq!(app.result, before);
    assert!(app.notice.is_none());
}

#[test]
fn validation_ordering_reports_invalid_input_first() {
    let mut app = App::new();
    update(&mut app, calculate("0", "0"));
    assert_eq!(app.notice, Some(ValidationError::InvalidInput));
}

#[test]
fn reset_after_reset_is_a_noop() {
    let mut app = App::new();
    update(&mut app, calculate("170", "65"));

    assert_eq!(update(&mut app, Action::Reset), Effect::ClearInputs);
    assert!(app.result.is_none());

    assert_eq!(update(&mut app, Action::Reset), Effect::ClearInputs);
    assert!(app.result.is_none());
    assert!(app.notice.is_none());
}

#[test]
fn full_session_calculate_toggle_reset() {
    let mut app = App::new();

    update(&mut app, Action::ToggleTable);
    assert!(app.show_table);

    update(&mut app, calculate("180", "95"));
    assert!(app.result.is_some());
    // Toggling the table does not disturb the result.
    update(&mut app, Action::ToggleTable);
    assert!(!app.show_table);
    assert!(app.result.is_some());

    update(&mut app, Action::Reset);
    assert!(app.result.is_none());

    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
