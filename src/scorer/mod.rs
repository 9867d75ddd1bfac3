pub mod engine;
pub mod types;

pub use self::types::{Contribution, ScoreDetails, SkipReason, SkippedAnswer};
use crate::catalog::QuestionCatalog;
use crate::category::{Category, ScoreVector};
use crate::results::{result_for, DiagnosisResult};

/// Maps an ordered answer list onto one of the four result profiles.
///
/// Stateless apart from the catalog it reads; every call is independent and
/// never fails, whatever the length or content of `answers`.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub catalog: QuestionCatalog,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(QuestionCatalog::builtin())
    }
}

impl Scorer {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn diagnose<S: AsRef<str>>(&self, answers: &[S]) -> &'static DiagnosisResult {
        result_for(self.classify(answers))
    }

    pub fn classify<S: AsRef<str>>(&self, answers: &[S]) -> Category {
        self.score_full(answers).winner()
    }

    pub fn score_full<S: AsRef<str>>(&self, answers: &[S]) -> ScoreVector {
        engine::score_full(&self.catalog, answers)
    }

    pub fn score_details<S: AsRef<str>>(&self, answers: &[S]) -> ScoreDetails {
        engine::score_details(&self.catalog, answers)
    }
}
