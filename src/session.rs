use crate::catalog::Question;
use crate::error::{QuizError, QuizResult};
use crate::results::DiagnosisResult;
use crate::scorer::Scorer;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, info};

pub const DIAGNOSIS_FAILED_MESSAGE: &str =
    "診断結果の生成中にエラーが発生しました。もう一度お試しください。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    Start,
    InProgress { index: usize },
    Loading,
    Finished(&'static DiagnosisResult),
    Error(String),
}

/// The question currently on screen, with its 1-based position.
#[derive(Debug, Clone, Copy)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    pub number: usize,
    pub total: usize,
}

impl QuestionView<'_> {
    pub fn progress_percent(&self) -> f32 {
        (self.number as f32 / self.total as f32) * 100.0
    }
}

/// One pass through the quiz, from the start screen to a result.
pub struct QuizSession<'s> {
    scorer: &'s Scorer,
    state: QuizState,
    answers: Vec<String>,
}

impl<'s> QuizSession<'s> {
    pub fn new(scorer: &'s Scorer) -> Self {
        Self {
            scorer,
            state: QuizState::Start,
            answers: Vec::new(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Begins a fresh pass. Also serves as the restart action from any state.
    pub fn start(&mut self) {
        debug!("session reset");
        self.answers.clear();
        self.state = QuizState::InProgress { index: 0 };
    }

    pub fn current_question(&self) -> Option<QuestionView<'s>> {
        let QuizState::InProgress { index } = self.state else {
            return None;
        };
        let catalog = &self.scorer.catalog;
        catalog.get(index).map(|question| QuestionView {
            question,
            number: index + 1,
            total: catalog.len(),
        })
    }

    /// Records the answer for the current question and advances.
    pub fn answer(&mut self, label: &str) -> QuizResult<&QuizState> {
        let QuizState::InProgress { index } = self.state else {
            return Err(QuizError::Session(format!(
                "cannot answer while in state {:?}",
                self.state
            )));
        };

        self.answers.push(label.to_string());

        let next = index + 1;
        self.state = if next < self.scorer.catalog.len() {
            QuizState::InProgress { index: next }
        } else {
            info!("all {} answers collected", self.answers.len());
            QuizState::Loading
        };
        Ok(&self.state)
    }

    /// Runs the diagnosis once all answers are in.
    pub fn complete(&mut self) -> QuizResult<&QuizState> {
        if self.state != QuizState::Loading {
            return Err(QuizError::Session(format!(
                "cannot complete while in state {:?}",
                self.state
            )));
        }

        let scorer = self.scorer;
        let answers = self.answers.as_slice();
        self.state = run_guarded(|| scorer.diagnose(answers));
        Ok(&self.state)
    }
}

/// Converts a panic inside `diagnose` into the error state.
pub(crate) fn run_guarded<F>(diagnose: F) -> QuizState
where
    F: FnOnce() -> &'static DiagnosisResult,
{
    match panic::catch_unwind(AssertUnwindSafe(diagnose)) {
        Ok(result) => {
            info!("✅ Diagnosis: {}", result.type_name);
            QuizState::Finished(result)
        }
        Err(_) => {
            error!("❌ Diagnosis failed");
            QuizState::Error(DIAGNOSIS_FAILED_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_in_diagnosis_becomes_error_state() {
        let state = run_guarded(|| panic!("boom"));
        assert_eq!(state, QuizState::Error(DIAGNOSIS_FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn guarded_success_is_finished() {
        let scorer = Scorer::default();
        let state = run_guarded(|| scorer.diagnose::<&str>(&[]));
        assert!(matches!(state, QuizState::Finished(r) if r.type_name == "スピード導入型"));
    }
}
