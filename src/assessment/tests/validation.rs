use super::common::*;
use crate::assessment::catalog::{CriterionDefinition, CriterionKind, ImpactLevel};
use crate::assessment::validation::{accept, validate, Violation};
use crate::assessment::{AnswerValue, RawValue};

fn criterion(kind: CriterionKind, required: bool) -> CriterionDefinition {
    CriterionDefinition {
        id: "critere_test",
        prompt: "Question",
        kind,
        unit: None,
        help: None,
        required,
        impact: ImpactLevel::Medium,
    }
}

#[test]
fn numeric_within_declared_bounds_is_accepted() {
    let definition = criterion(
        CriterionKind::Numeric {
            min: Some(0.0),
            max: Some(1_000_000.0),
        },
        true,
    );
    let violations = validate(&definition, Some(&RawValue::Number(150.0)));
    assert!(violations.is_empty());
}

#[test]
fn numeric_below_minimum_is_rejected() {
    let definition = criterion(
        CriterionKind::Numeric {
            min: Some(0.0),
            max: Some(1_000_000.0),
        },
        true,
    );
    let violations = validate(&definition, Some(&RawValue::Number(-12.0)));
    assert_eq!(violations, vec![Violation::BelowMinimum { min: 0.0 }]);
    assert_eq!(
        violations[0].to_string(),
        "must be greater than or equal to 0"
    );
}

#[test]
fn numeric_unparseable_text_is_rejected_once() {
    let definition = criterion(CriterionKind::Numeric { min: None, max: None }, true);
    let violations = validate(&definition, Some(&RawValue::Text("beaucoup".to_string())));
    assert_eq!(violations, vec![Violation::NotANumber]);
}

#[test]
fn numeric_text_parses_to_number() {
    let definition = criterion(CriterionKind::Numeric { min: None, max: None }, true);
    let value = accept(&definition, &RawValue::Text("42.5".to_string())).expect("parses");
    assert_eq!(value, AnswerValue::Number(42.5));
}

#[test]
fn negative_percentage_is_rejected_with_range_message() {
    let definition = criterion(CriterionKind::Percentage, true);
    let violations = validate(&definition, Some(&RawValue::Number(-5.0)));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].to_string(), "must be between 0 and 100");
}

#[test]
fn percentage_bounds_are_inclusive() {
    let definition = criterion(CriterionKind::Percentage, true);
    assert!(validate(&definition, Some(&RawValue::Number(0.0))).is_empty());
    assert!(validate(&definition, Some(&RawValue::Number(100.0))).is_empty());
    assert!(!validate(&definition, Some(&RawValue::Number(100.1))).is_empty());
}

#[test]
fn scale_rejects_values_outside_declared_bounds() {
    let definition = criterion(
        CriterionKind::Scale {
            min: 1,
            max: 10,
            labels: &[],
        },
        true,
    );
    let violations = validate(&definition, Some(&RawValue::Number(11.0)));
    assert_eq!(violations, vec![Violation::OutsideScale { min: 1, max: 10 }]);
    assert_eq!(violations[0].to_string(), "must be between 1 and 10");
}

#[test]
fn scale_rejects_fractional_values() {
    let definition = criterion(
        CriterionKind::Scale {
            min: 1,
            max: 5,
            labels: &[],
        },
        true,
    );
    let violations = validate(&definition, Some(&RawValue::Number(3.5)));
    assert_eq!(violations, vec![Violation::NotAWholeNumber]);
}

#[test]
fn scale_converts_to_integer() {
    let definition = criterion(
        CriterionKind::Scale {
            min: 1,
            max: 10,
            labels: &[],
        },
        true,
    );
    let value = accept(&definition, &RawValue::Number(7.0)).expect("within scale");
    assert_eq!(value, AnswerValue::Integer(7));
}

#[test]
fn affirmative_french_token_is_accepted_as_true() {
    let definition = criterion(CriterionKind::Boolean, true);
    let value = accept(&definition, &RawValue::Text("Oui".to_string())).expect("recognized token");
    assert_eq!(value, AnswerValue::Boolean(true));
}

#[test]
fn negative_tokens_map_to_false() {
    let definition = criterion(CriterionKind::Boolean, true);
    for token in ["Non", "no", "FALSE", "0"] {
        let value =
            accept(&definition, &RawValue::Text(token.to_string())).expect("recognized token");
        assert_eq!(value, AnswerValue::Boolean(false), "token {token}");
    }
}

#[test]
fn unrecognized_boolean_token_is_rejected() {
    let definition = criterion(CriterionKind::Boolean, true);
    let violations = validate(&definition, Some(&RawValue::Text("peut-être".to_string())));
    assert_eq!(violations, vec![Violation::NotABoolean]);
}

#[test]
fn unknown_choice_lists_the_valid_set() {
    let options: &[&str] = &["Train", "Camion", "Bateau", "Avion", "Transport multimodal"];
    let definition = criterion(CriterionKind::SingleChoice { options }, true);
    let violations = validate(&definition, Some(&RawValue::Text("Violet".to_string())));
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].to_string(),
        "must be one of: Train, Camion, Bateau, Avion, Transport multimodal"
    );
}

#[test]
fn exact_choice_match_is_required() {
    let options: &[&str] = &["Gratuit", "Prix modéré"];
    let definition = criterion(CriterionKind::SingleChoice { options }, true);
    assert!(validate(&definition, Some(&RawValue::Text("Gratuit".to_string()))).is_empty());
    assert!(!validate(&definition, Some(&RawValue::Text("gratuit".to_string()))).is_empty());
}

#[test]
fn text_over_declared_length_is_rejected() {
    let definition = criterion(
        CriterionKind::FreeText {
            max_length: 10,
            min_length: None,
        },
        false,
    );
    let violations = validate(
        &definition,
        Some(&RawValue::Text("bien trop long pour dix".to_string())),
    );
    assert_eq!(violations, vec![Violation::TextTooLong { max: 10 }]);
}

#[test]
fn short_trimmed_text_fails_declared_minimum() {
    let definition = criterion(
        CriterionKind::FreeText {
            max_length: 100,
            min_length: Some(5),
        },
        false,
    );
    let violations = validate(&definition, Some(&RawValue::Text("  ab  ".to_string())));
    assert_eq!(violations, vec![Violation::TextTooShort { min: 5 }]);
}

#[test]
fn required_without_value_short_circuits() {
    let definition = criterion(CriterionKind::Percentage, true);
    let violations = validate(&definition, None);
    assert_eq!(violations, vec![Violation::Required]);
}

#[test]
fn optional_without_value_is_valid() {
    let definition = criterion(CriterionKind::Percentage, false);
    assert!(validate(&definition, None).is_empty());
}

#[test]
fn every_standard_criterion_accepts_its_sample_value() {
    let catalog = standard_catalog();
    for category in catalog.categories() {
        for subcategory in &category.subcategories {
            for criterion in &subcategory.criteria {
                let raw = sample_raw(&criterion.kind);
                let violations = validate(criterion, Some(&raw));
                assert!(
                    violations.is_empty(),
                    "criterion {} rejected its sample value: {violations:?}",
                    criterion.id
                );
            }
        }
    }
}
