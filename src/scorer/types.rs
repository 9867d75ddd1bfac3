use crate::category::{Category, ScoreVector, Weights};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// More answers than questions.
    OutOfRange,
    /// Answer text is not one of the question's options.
    UnknownOption,
}

/// Points one accepted answer added to the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub index: usize,
    pub question_id: u32,
    pub answer: String,
    pub weights: Weights,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedAnswer {
    pub index: usize,
    pub answer: String,
    pub reason: SkipReason,
}

/// Full audit trail of a diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreDetails {
    pub scores: ScoreVector,
    pub winner: Category,
    pub contributions: Vec<Contribution>,
    pub skipped: Vec<SkippedAnswer>,
}

