//! Weighted grade aggregation
//!
//! Parses a JSON list of assignments, validates every row, and reduces it
//! to a weighted percentage plus a letter grade.

use crate::errors::{QueryError, Result};
use serde::Deserialize;
use std::fmt;

/// One graded assignment
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Assignment {
    #[serde(default)]
    pub name: String,
    pub score: f64,
    #[serde(rename = "maxScore", alias = "max_score", alias = "max")]
    pub max_score: f64,
    pub weight: f64,
}

impl Assignment {
    pub fn new(name: impl Into<String>, score: f64, max_score: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            score,
            max_score,
            weight,
        }
    }

    /// Check a single row before it takes part in aggregation
    fn validate(&self, index: usize) -> Result<()> {
        let label = if self.name.is_empty() {
            format!("assignment #{}", index + 1)
        } else {
            format!("assignment '{}'", self.name)
        };

        if !self.score.is_finite() || !self.max_score.is_finite() || !self.weight.is_finite() {
            return Err(QueryError::Validation(format!(
                "{} has a non-finite value",
                label
            )));
        }
        if self.max_score <= 0.0 {
            return Err(QueryError::Validation(format!(
                "{} must have maxScore > 0 (got {})",
                label, self.max_score
            )));
        }
        if self.weight <= 0.0 {
            return Err(QueryError::Validation(format!(
                "{} must have weight > 0 (got {})",
                label, self.weight
            )));
        }
        Ok(())
    }

    /// Score as a percentage of the maximum; extra credit is kept
    pub fn normalized(&self) -> f64 {
        self.score / self.max_score * 100.0
    }
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::F => "F",
        };
        f.write_str(s)
    }
}

/// Right-open partition of the percentage axis into letters.
///
/// Bands are ordered by descending lower bound and the last band starts at
/// negative infinity, so every non-NaN percentage lands in exactly one band.
#[derive(Debug, Clone)]
pub struct LetterScale {
    bands: Vec<(f64, Letter)>,
}

impl LetterScale {
    /// Build a scale, panicking if the bands do not cover the whole axis.
    pub fn new(bands: Vec<(f64, Letter)>) -> Self {
        assert!(!bands.is_empty(), "letter scale needs at least one band");
        assert!(
            bands.windows(2).all(|w| w[0].0 > w[1].0),
            "letter bands must have strictly descending lower bounds"
        );
        assert!(
            bands.last().map(|(lower, _)| *lower) == Some(f64::NEG_INFINITY),
            "lowest letter band must be unbounded below"
        );
        Self { bands }
    }

    /// A >= 90, B >= 80, C >= 70, D >= 60, F otherwise
    pub fn standard() -> Self {
        Self::new(vec![
            (90.0, Letter::A),
            (80.0, Letter::B),
            (70.0, Letter::C),
            (60.0, Letter::D),
            (f64::NEG_INFINITY, Letter::F),
        ])
    }

    pub fn letter_for(&self, percentage: f64) -> Letter {
        assert!(!percentage.is_nan(), "grade percentage must not be NaN");
        self.bands
            .iter()
            .find(|(lower, _)| percentage >= *lower)
            .map(|(_, letter)| *letter)
            .unwrap_or_else(|| unreachable!("letter scale is exhaustive"))
    }
}

impl Default for LetterScale {
    fn default() -> Self {
        Self::standard()
    }
}

/// Weighted percentage and its letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeResult {
    pub percentage: f64,
    pub letter: Letter,
}

/// Reduce assignments to a weighted grade on the standard scale
pub fn compute_grade(assignments: &[Assignment]) -> Result<GradeResult> {
    compute_grade_with_scale(assignments, &LetterScale::standard())
}

/// Reduce assignments to a weighted grade on a custom scale
pub fn compute_grade_with_scale(
    assignments: &[Assignment],
    scale: &LetterScale,
) -> Result<GradeResult> {
    if assignments.is_empty() {
        return Err(QueryError::EmptyInput {
            what: "assignments",
        });
    }

    for (index, assignment) in assignments.iter().enumerate() {
        assignment.validate(index)?;
    }

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for assignment in assignments {
        weighted_sum += assignment.normalized() * assignment.weight;
        weight_total += assignment.weight;
    }

    // Every weight was checked positive above.
    assert!(weight_total > 0.0, "weight total must be positive after validation");

    let percentage = weighted_sum / weight_total;
    if !weight_total.is_finite() || !percentage.is_finite() {
        return Err(QueryError::Validation(
            "assignment values are too large to aggregate".to_string(),
        ));
    }

    Ok(GradeResult {
        percentage,
        letter: scale.letter_for(percentage),
    })
}

/// Parse the JSON payload of a grade query
pub fn parse_assignments(payload: &str) -> Result<Vec<Assignment>> {
    serde_json::from_str(payload.trim())
        .map_err(|e| QueryError::Validation(format!("could not read assignments: {}", e)))
}

/// Handle a `calculate grade: <JSON>` query
pub fn answer(payload: &str) -> Result<String> {
    let assignments = parse_assignments(payload)?;
    let grade = compute_grade(&assignments)?;
    let noun = if assignments.len() == 1 {
        "assignment"
    } else {
        "assignments"
    };
    Ok(format!(
        "Weighted grade: {:.2}% ({}) across {} {}",
        grade.percentage,
        grade.letter,
        assignments.len(),
        noun
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_boundary_ninety_is_a() {
        let grade = compute_grade(&[Assignment::new("quiz", 90.0, 100.0, 1.0)]).unwrap();
        assert!((grade.percentage - 90.0).abs() < 1e-9);
        assert_eq!(grade.letter, Letter::A);
    }

    #[test]
    fn test_weighted_average() {
        let grade = compute_grade(&[
            Assignment::new("hw1", 45.0, 50.0, 2.0),
            Assignment::new("hw2", 38.0, 40.0, 1.0),
        ])
        .unwrap();
        assert!((grade.percentage - 91.666_666).abs() < 1e-4);
        assert_eq!(grade.letter, Letter::A);
    }

    #[test]
    fn test_extra_credit_is_not_clamped() {
        let grade = compute_grade(&[Assignment::new("bonus", 120.0, 100.0, 1.0)]).unwrap();
        assert!((grade.percentage - 120.0).abs() < 1e-9);
        assert_eq!(grade.letter, Letter::A);
    }

    #[test]
    fn test_weight_total_overflow_rejected() {
        let err = compute_grade(&[
            Assignment::new("a", 0.5, 100.0, 1e308),
            Assignment::new("b", 0.5, 100.0, 1e308),
        ])
        .unwrap_err();
        assert!(matches!(err, QueryError::Validation(_)));
    }

    #[test]
    fn test_empty_input() {
        let err = compute_grade(&[]).unwrap_err();
        assert!(matches!(err, QueryError::EmptyInput { what: "assignments" }));
    }

    #[test]
    fn test_zero_max_score_rejected() {
        let err = compute_grade(&[Assignment::new("x", 1.0, 0.0, 1.0)]).unwrap_err();
        assert!(matches!(err, QueryError::Validation(_)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = compute_grade(&[
            Assignment::new("ok", 1.0, 1.0, 1.0),
            Assignment::new("bad", 1.0, 1.0, -2.0),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_letter_boundaries() {
        let scale = LetterScale::standard();
        assert_eq!(scale.letter_for(100.0), Letter::A);
        assert_eq!(scale.letter_for(89.999), Letter::B);
        assert_eq!(scale.letter_for(80.0), Letter::B);
        assert_eq!(scale.letter_for(79.5), Letter::C);
        assert_eq!(scale.letter_for(70.0), Letter::C);
        assert_eq!(scale.letter_for(60.0), Letter::D);
        assert_eq!(scale.letter_for(59.99), Letter::F);
        assert_eq!(scale.letter_for(-15.0), Letter::F);
        assert_eq!(scale.letter_for(1e9), Letter::A);
    }

    #[test]
    #[should_panic(expected = "unbounded below")]
    fn test_scale_must_be_exhaustive() {
        LetterScale::new(vec![(90.0, Letter::A), (0.0, Letter::F)]);
    }

    #[test]
    #[should_panic(expected = "descending")]
    fn test_scale_must_be_ordered() {
        LetterScale::new(vec![
            (80.0, Letter::B),
            (90.0, Letter::A),
            (f64::NEG_INFINITY, Letter::F),
        ]);
    }

    #[test]
    fn test_parse_accepts_short_max_key() {
        let parsed = parse_assignments(r#"[{"score":90,"max":100,"weight":1}]"#).unwrap();
        assert_eq!(parsed[0].max_score, 100.0);
        assert!(parsed[0].name.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = parse_assignments(r#"[{"score":"ninety","maxScore":100,"weight":1}]"#)
            .unwrap_err();
        assert!(matches!(err, QueryError::Validation(_)));
    }

    #[test]
    fn test_answer_format() {
        let answer = answer(
            r#"[{"name":"hw1","score":45,"maxScore":50,"weight":2},
                {"name":"hw2","score":38,"maxScore":40,"weight":1}]"#,
        )
        .unwrap();
        assert_eq!(answer, "Weighted grade: 91.67% (A) across 2 assignments");
    }

    #[quickcheck]
    fn prop_every_percentage_has_one_letter(p: f64) -> bool {
        if p.is_nan() {
            return true;
        }
        let scale = LetterScale::standard();
        let letter = scale.letter_for(p);
        let expected = if p >= 90.0 {
            Letter::A
        } else if p >= 80.0 {
            Letter::B
        } else if p >= 70.0 {
            Letter::C
        } else if p >= 60.0 {
            Letter::D
        } else {
            Letter::F
        };
        letter == expected
    }

    #[quickcheck]
    fn prop_uniform_weights_give_mean(scores: Vec<u8>) -> bool {
        if scores.is_empty() {
            return true;
        }
        let assignments: Vec<Assignment> = scores
            .iter()
            .map(|s| Assignment::new("", f64::from(*s), 255.0, 1.0))
            .collect();
        let mean = scores.iter().map(|s| f64::from(*s) / 255.0 * 100.0).sum::<f64>()
            / scores.len() as f64;
        let grade = compute_grade(&assignments).unwrap();
        (grade.percentage - mean).abs() < 1e-6
    }
}
