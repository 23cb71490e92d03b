//! # BMI Engine
//!
//! Pure domain logic: validate raw height/weight text, compute the body mass
//! index, classify it against the fixed category table, and derive the
//! ideal-weight range for a given height.
//!
//! Everything here is a total function over its validated domain. The only
//! fallible step is [`validate`]; once a [`Measurement`] exists, computation
//! and classification cannot fail.
//!
//! Classification always uses the *unrounded* BMI. The rounded value is for
//! display only, so a raw BMI of 22.95 shows as "23.0" but still classifies
//! as 정상 (< 23). This matches the reference behavior and must not be
//! "fixed" by classifying the rounded value.

use std::fmt;

/// Category labels, ordered by increasing BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
    SeverelyObese,
}

impl Category {
    /// Human-readable Korean label, as shown in the result badge and table.
    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "저체중",
            Category::Normal => "정상",
            Category::Overweight => "과체중",
            Category::Obese => "비만",
            Category::SeverelyObese => "고도비만",
        }
    }
}

/// One row of the category table: a half-open BMI interval `[min, max)`
/// plus its display attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryThreshold {
    pub label: Category,
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound. The last row's bound is [`UPPER_SENTINEL`] and
    /// is treated as unbounded by [`classify`].
    pub max: f64,
    /// Badge color as RGB (the TUI maps this to a terminal color).
    pub display_color: (u8, u8, u8),
    pub display_icon: &'static str,
}

/// Sentinel upper bound of the last table row; any BMI at or above the last
/// row's `min` classifies into it regardless of this value.
pub const UPPER_SENTINEL: f64 = 100.0;

/// 대한비만학회 BMI category table. Rows are contiguous and non-overlapping
/// over `[0, +∞)`; classification walks them in order.
pub const CATEGORIES: [CategoryThreshold; 5] = [
    CategoryThreshold {
        label: Category::Underweight,
        min: 0.0,
        max: 18.5,
        display_color: (52, 152, 219),
        display_icon: "🔵",
    },
    CategoryThreshold {
        label: Category::Normal,
        min: 18.5,
        max: 23.0,
        display_color: (46, 204, 113),
        display_icon: "🟢",
    },
    CategoryThreshold {
        label: Category::Overweight,
        min: 23.0,
        max: 25.0,
        display_color: (243, 156, 18),
        display_icon: "🟡",
    },
    CategoryThreshold {
        label: Category::Obese,
        min: 25.0,
        max: 30.0,
        display_color: (231, 76, 60),
        display_icon: "🟠",
    },
    CategoryThreshold {
        label: Category::SeverelyObese,
        min: 30.0,
        max: UPPER_SENTINEL,
        display_color: (192, 57, 43),
        display_icon: "🔴",
    },
];

/// Accepted height range in centimeters (inclusive).
pub const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 250.0);
/// Accepted weight range in kilograms (inclusive).
pub const WEIGHT_RANGE_KG: (f64, f64) = (10.0, 300.0);

/// A validated height/weight pair. Exists only for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// The outcome of one successful calculation. `bmi`, `ideal_min` and
/// `ideal_max` are already rounded to one fractional digit.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: &'static CategoryThreshold,
    pub ideal_min: f64,
    pub ideal_max: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Why a calculation was refused. Rules are checked in declaration order and
/// the first failure wins; no error accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Non-numeric, empty, zero, negative, or non-finite input.
    InvalidInput,
    HeightOutOfRange,
    WeightOutOfRange,
}

impl ValidationError {
    /// User-facing notice text.
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::InvalidInput => "올바른 키와 몸무게를 입력해주세요.",
            ValidationError::HeightOutOfRange => "키는 50cm ~ 250cm 사이로 입력해주세요.",
            ValidationError::WeightOutOfRange => "몸무게는 10kg ~ 300kg 사이로 입력해주세요.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

fn parse_positive(text: &str) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => None,
    }
}

/// Parse raw field text and enforce domain bounds.
///
/// Both fields must parse to a positive finite number before either range is
/// checked, so `height=0, weight=0` reports [`ValidationError::InvalidInput`]
/// rather than a range error.
pub fn validate(height_text: &str, weight_text: &str) -> Result<Measurement, ValidationError> {
    let height_cm = parse_positive(height_text).ok_or(ValidationError::InvalidInput)?;
    let weight_kg = parse_positive(weight_text).ok_or(ValidationError::InvalidInput)?;

    if !(HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&height_cm) {
        return Err(ValidationError::HeightOutOfRange);
    }
    if !(WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&weight_kg) {
        return Err(ValidationError::WeightOutOfRange);
    }

    Ok(Measurement {
        height_cm,
        weight_kg,
    })
}

/// Raw (unrounded) BMI: `weight / (height/100)²`.
pub fn bmi_value(measurement: Measurement) -> f64 {
    let height_m = measurement.height_cm / 100.0;
    measurement.weight_kg / (height_m * height_m)
}

/// Round to one fractional digit, half away from zero (`f64::round`).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// First table row with `min <= bmi < max`. The table partitions `[0, +∞)`
/// so a miss can only mean `bmi >= UPPER_SENTINEL`; fall back to the
/// highest-severity row.
pub fn classify(bmi: f64) -> &'static CategoryThreshold {
    CATEGORIES
        .iter()
        .find(|row| bmi >= row.min && bmi < row.max)
        .unwrap_or(&CATEGORIES[4])
}

/// Weight range corresponding to the 정상 row for the given height, each
/// bound rounded to one fractional digit.
pub fn ideal_weight_range(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let normal = &CATEGORIES[1];
    (
        round1(normal.min * height_m * height_m),
        round1(normal.max * height_m * height_m),
    )
}

/// Advisory text for a category. 정상 gets none; all three overweight
/// severities share one message.
pub fn health_tip(category: Category) -> Option<&'static str> {
    match category {
        Category::Normal => None,
        Category::Underweight => Some(
            "균형 잡힌 식단과 적절한 영양 섭취가 필요합니다. 단백질과 건강한 지방 섭취를 늘려보세요.",
        ),
        Category::Overweight | Category::Obese | Category::SeverelyObese => Some(
            "규칙적인 운동과 균형 잡힌 식단이 도움됩니다. 주 3회 이상 30분 이상의 유산소 운동을 권장합니다.",
        ),
    }
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Human-readable interval for the reference table: "18.5 미만" for the
/// open-ended bottom row, "30 이상" for the open-ended top row, and
/// "`min` ~ `max`" for the rows in between.
pub fn range_text(row: &CategoryThreshold) -> String {
    if row.min == 0.0 {
        format!("{} 미만", format_bound(row.max))
    } else if row.max == UPPER_SENTINEL {
        format!("{} 이상", format_bound(row.min))
    } else {
        format!("{} ~ {}", format_bound(row.min), format_bound(row.max))
    }
}

/// Full pipeline: validate, compute, classify, derive the ideal range.
/// This is the single entry point the reducer calls per 계산하기 press.
pub fn evaluate(height_text: &str, weight_text: &str) -> Result<BmiResult, ValidationError> {
    let measurement = validate(height_text, weight_text)?;
    let raw_bmi = bmi_value(measurement);
    let category = classify(raw_bmi);
    let (ideal_min, ideal_max) = ideal_weight_range(measurement.height_cm);

    Ok(BmiResult {
        bmi: round1(raw_bmi),
        category,
        ideal_min,
        ideal_max,
        height_cm: measurement.height_cm,
        weight_kg: measurement.weight_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_plain_numbers() {
        let m = validate("170", "65").unwrap();
        assert_eq!(m.height_cm, 170.0);
        assert_eq!(m.weight_kg, 65.0);
    }

    #[test]
    fn test_validate_accepts_decimals_and_whitespace() {
        let m = validate(" 170.5 ", "65.2").unwrap();
        assert_eq!(m.height_cm, 170.5);
        assert_eq!(m.weight_kg, 65.2);
    }

    #[test]
    fn test_validate_rejects_non_numeric() {
        assert_eq!(validate("abc", "65"), Err(ValidationError::InvalidInput));
        assert_eq!(validate("170", ""), Err(ValidationError::InvalidInput));
        assert_eq!(validate("", ""), Err(ValidationError::InvalidInput));
    }

    #[test]
    fn test_validate_rejects_zero_and_negative() {
        assert_eq!(validate("0", "65"), Err(ValidationError::InvalidInput));
        assert_eq!(validate("170", "-5"), Err(ValidationError::InvalidInput));
    }

    #[test]
    fn test_validate_ordering_invalid_before_range() {
        // Both fields are checked for rule 1 before any range rule runs.
        assert_eq!(validate("0", "0"), Err(ValidationError::InvalidInput));
        assert_eq!(validate("30", "0"), Err(ValidationError::InvalidInput));
    }

    #[test]
    fn test_validate_height_bounds() {
        assert_eq!(
            validate("30", "70"),
            Err(ValidationError::HeightOutOfRange)
        );
        assert_eq!(
            validate("251", "70"),
            Err(ValidationError::HeightOutOfRange)
        );
        // Inclusive endpoints.
        assert!(validate("50", "70").is_ok());
        assert!(validate("250", "70").is_ok());
    }

    #[test]
    fn test_validate_weight_bounds() {
        assert_eq!(
            validate("170", "500"),
            Err(ValidationError::WeightOutOfRange)
        );
        assert_eq!(
            validate("170", "9.9"),
            Err(ValidationError::WeightOutOfRange)
        );
        assert!(validate("170", "10").is_ok());
        assert!(validate("170", "300").is_ok());
    }

    #[test]
    fn test_bmi_formula() {
        let bmi = bmi_value(Measurement {
            height_cm: 170.0,
            weight_kg: 65.0,
        });
        assert!((bmi - 22.49134948096886).abs() < 1e-9);
    }

    #[test]
    fn test_round1_half_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(1.25), 1.3);
        assert_eq!(round1(22.44), 22.4);
        assert_eq!(round1(22.45000001), 22.5);
    }

    #[test]
    fn test_classify_boundaries_go_to_upper_category() {
        assert_eq!(classify(18.5).label, Category::Normal);
        assert_eq!(classify(23.0).label, Category::Overweight);
        assert_eq!(classify(25.0).label, Category::Obese);
        assert_eq!(classify(30.0).label, Category::SeverelyObese);
    }

    #[test]
    fn test_classify_interior_values() {
        assert_eq!(classify(0.0).label, Category::Underweight);
        assert_eq!(classify(18.49).label, Category::Underweight);
        assert_eq!(classify(22.9).label, Category::Normal);
        assert_eq!(classify(24.0).label, Category::Overweight);
        assert_eq!(classify(29.9).label, Category::Obese);
        assert_eq!(classify(45.0).label, Category::SeverelyObese);
    }

    #[test]
    fn test_classify_beyond_sentinel_falls_back() {
        // No row has max > 100, so this exercises the defensive fallback.
        assert_eq!(classify(100.0).label, Category::SeverelyObese);
        assert_eq!(classify(250.0).label, Category::SeverelyObese);
    }

    #[test]
    fn test_table_partitions_zero_to_infinity() {
        assert_eq!(CATEGORIES[0].min, 0.0);
        for pair in CATEGORIES.windows(2) {
            // Contiguous: each row starts exactly where the previous ends.
            assert_eq!(pair[0].max, pair[1].min);
        }
        // Exactly one row matches any sample point across the whole range.
        for step in 0..2000 {
            let bmi = step as f64 * 0.05;
            let matches = CATEGORIES
                .iter()
                .filter(|row| bmi >= row.min && bmi < row.max)
                .count();
            assert_eq!(matches, 1, "bmi={bmi} matched {matches} rows");
        }
    }

    #[test]
    fn test_ideal_weight_range_monotonic_in_height() {
        let mut previous = ideal_weight_range(50.0);
        for height in 51..=250 {
            let current = ideal_weight_range(height as f64);
            assert!(current.0 > previous.0, "min not increasing at {height}cm");
            assert!(current.1 > previous.1, "max not increasing at {height}cm");
            previous = current;
        }
    }

    #[test]
    fn test_health_tip_selection() {
        assert!(health_tip(Category::Normal).is_none());
        let under = health_tip(Category::Underweight).unwrap();
        assert!(under.contains("영양"));
        // One shared advisory for all three overweight severities.
        let over = health_tip(Category::Overweight).unwrap();
        assert_eq!(health_tip(Category::Obese), Some(over));
        assert_eq!(health_tip(Category::SeverelyObese), Some(over));
        assert!(over.contains("운동"));
    }

    #[test]
    fn test_range_text() {
        assert_eq!(range_text(&CATEGORIES[0]), "18.5 미만");
        assert_eq!(range_text(&CATEGORIES[1]), "18.5 ~ 23");
        assert_eq!(range_text(&CATEGORIES[2]), "23 ~ 25");
        assert_eq!(range_text(&CATEGORIES[3]), "25 ~ 30");
        assert_eq!(range_text(&CATEGORIES[4]), "30 이상");
    }

    #[test]
    fn test_evaluate_normal_scenario() {
        let result = evaluate("170", "65").unwrap();
        assert_eq!(result.bmi, 22.5);
        assert_eq!(result.category.label, Category::Normal);
        assert_eq!(result.ideal_min, 53.5);
        assert_eq!(result.ideal_max, 66.5);
        assert_eq!(result.height_cm, 170.0);
        assert_eq!(result.weight_kg, 65.0);
    }

    #[test]
    fn test_evaluate_underweight_scenario() {
        let result = evaluate("160", "45").unwrap();
        assert_eq!(result.bmi, 17.6);
        assert_eq!(result.category.label, Category::Underweight);
        assert!(health_tip(result.category.label).is_some());
    }

    #[test]
    fn test_evaluate_obese_scenario() {
        let result = evaluate("180", "95").unwrap();
        assert_eq!(result.bmi, 29.3);
        assert_eq!(result.category.label, Category::Obese);
        assert!(health_tip(result.category.label).is_some());
    }

    #[test]
    fn test_evaluate_rejects_out_of_range() {
        assert_eq!(
            evaluate("30", "70"),
            Err(ValidationError::HeightOutOfRange)
        );
        assert_eq!(
            evaluate("170", "500"),
            Err(ValidationError::WeightOutOfRange)
        );
    }

    #[test]
    fn test_classification_uses_unrounded_bmi() {
        // Raw BMI 22.95… rounds to 23.0 for display but stays 정상,
        // because classification happens before rounding.
        let raw = 22.95;
        assert_eq!(round1(raw), 23.0);
        assert_eq!(classify(raw).label, Category::Normal);
    }

    #[test]
    fn test_validation_is_idempotent() {
        assert_eq!(validate("170", "65"), validate("170", "65"));
        assert_eq!(validate("30", "70"), validate("30", "70"));
    }
}
