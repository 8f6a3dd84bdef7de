//! Malnutrition Screening Tool (MST)
//!
//! Two questions: unintentional weight loss (with its magnitude) and reduced intake
//! because of decreased appetite. Invalid answers never fail, they score 0.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum total score considered "at risk"
pub const MST_RISK_THRESHOLD: u8 = 2;

/// Answer to "have you lost weight recently without trying?"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightLossAnswer {
    #[default]
    No,
    Unsure,
    Yes,
}

impl FromStr for WeightLossAnswer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "no" => Ok(WeightLossAnswer::No),
            "unsure" => Ok(WeightLossAnswer::Unsure),
            "yes" => Ok(WeightLossAnswer::Yes),
            other => Err(format!("Unknown weight loss answer: '{}'", other)),
        }
    }
}

/// Answers to both MST questions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MstAnswers {
    pub weight_loss: WeightLossAnswer,
    /// Kilograms lost, only read when `weight_loss` is [`WeightLossAnswer::Yes`]
    pub kg_lost: Option<f64>,
    /// Eating poorly because of decreased appetite
    pub reduced_intake: bool,
}

impl MstAnswers {
    pub fn new(weight_loss: WeightLossAnswer, kg_lost: Option<f64>, reduced_intake: bool) -> Self {
        Self {
            weight_loss,
            kg_lost,
            reduced_intake,
        }
    }
}

/// Screening category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MstRisk {
    AtRisk,
    NotAtRisk,
}

impl fmt::Display for MstRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstRisk::AtRisk => write!(f, "at risk"),
            MstRisk::NotAtRisk => write!(f, "not at risk"),
        }
    }
}

/// MST result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstScore {
    /// Weight-loss sub-score (0–4)
    pub weight_loss_points: u8,
    /// Reduced-intake sub-score (0–1)
    pub intake_points: u8,
    pub total: u8,
    pub risk: MstRisk,
}

/// Weight-loss sub-score
///
/// | Answer | kg lost | Points |
/// |--------|---------|--------|
/// | no | – | 0 |
/// | unsure | – | 2 |
/// | yes | ≤ 0 or missing | 0 |
/// | yes | (0, 5] | 1 |
/// | yes | (5, 10] | 2 |
/// | yes | (10, 15] | 3 |
/// | yes | > 15 | 4 |
pub fn weight_loss_points(answer: WeightLossAnswer, kg_lost: Option<f64>) -> u8 {
    match answer {
        WeightLossAnswer::No => 0,
        WeightLossAnswer::Unsure => 2,
        WeightLossAnswer::Yes => match kg_lost.filter(|kg| kg.is_finite()) {
            Some(kg) if kg <= 0.0 => 0,
            Some(kg) if kg <= 5.0 => 1,
            Some(kg) if kg <= 10.0 => 2,
            Some(kg) if kg <= 15.0 => 3,
            Some(_) => 4,
            None => 0,
        },
    }
}

/// Reduced-intake sub-score
pub fn intake_points(reduced_intake: bool) -> u8 {
    u8::from(reduced_intake)
}

/// Score both MST questions
pub fn mst_score(answers: &MstAnswers) -> MstScore {
    let weight_loss_points = weight_loss_points(answers.weight_loss, answers.kg_lost);
    let intake_points = intake_points(answers.reduced_intake);
    let total = weight_loss_points + intake_points;
    let risk = if total >= MST_RISK_THRESHOLD {
        MstRisk::AtRisk
    } else {
        MstRisk::NotAtRisk
    };

    MstScore {
        weight_loss_points,
        intake_points,
        total,
        risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_loss_bands() {
        let yes = WeightLossAnswer::Yes;
        assert_eq!(weight_loss_points(yes, Some(0.0)), 0);
        assert_eq!(weight_loss_points(yes, Some(-2.0)), 0);
        assert_eq!(weight_loss_points(yes, Some(0.5)), 1);
        assert_eq!(weight_loss_points(yes, Some(5.0)), 1);
        assert_eq!(weight_loss_points(yes, Some(5.1)), 2);
        assert_eq!(weight_loss_points(yes, Some(10.0)), 2);
        assert_eq!(weight_loss_points(yes, Some(12.0)), 3);
        assert_eq!(weight_loss_points(yes, Some(15.0)), 3);
        assert_eq!(weight_loss_points(yes, Some(15.0001)), 4);
        assert_eq!(weight_loss_points(yes, Some(40.0)), 4);
    }

    #[test]
    fn test_weight_loss_invalid_kg_scores_zero() {
        let yes = WeightLossAnswer::Yes;
        assert_eq!(weight_loss_points(yes, None), 0);
        assert_eq!(weight_loss_points(yes, Some(f64::NAN)), 0);
        assert_eq!(weight_loss_points(yes, Some(f64::INFINITY)), 0);
    }

    #[test]
    fn test_kg_ignored_unless_yes() {
        assert_eq!(weight_loss_points(WeightLossAnswer::No, Some(20.0)), 0);
        assert_eq!(weight_loss_points(WeightLossAnswer::Unsure, Some(20.0)), 2);
    }

    #[test]
    fn test_mst_at_risk() {
        let score = mst_score(&MstAnswers::new(WeightLossAnswer::Yes, Some(7.0), true));
        assert_eq!(score.weight_loss_points, 2);
        assert_eq!(score.intake_points, 1);
        assert_eq!(score.total, 3);
        assert_eq!(score.risk, MstRisk::AtRisk);
        assert_eq!(score.risk.to_string(), "at risk");
    }

    #[test]
    fn test_mst_not_at_risk() {
        let score = mst_score(&MstAnswers::new(WeightLossAnswer::Yes, Some(3.0), false));
        assert_eq!(score.total, 1);
        assert_eq!(score.risk, MstRisk::NotAtRisk);

        let score = mst_score(&MstAnswers::default());
        assert_eq!(score.total, 0);
        assert_eq!(score.risk, MstRisk::NotAtRisk);
    }

    #[test]
    fn test_unsure_alone_is_at_risk() {
        let score = mst_score(&MstAnswers::new(WeightLossAnswer::Unsure, None, false));
        assert_eq!(score.total, 2);
        assert_eq!(score.risk, MstRisk::AtRisk);
    }

    #[test]
    fn test_weight_loss_answer_from_str() {
        assert_eq!(
            "Yes".parse::<WeightLossAnswer>().unwrap(),
            WeightLossAnswer::Yes
        );
        assert_eq!(
            "unsure".parse::<WeightLossAnswer>().unwrap(),
            WeightLossAnswer::Unsure
        );
        assert!("maybe".parse::<WeightLossAnswer>().is_err());
    }
}
