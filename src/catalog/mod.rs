pub mod builtin;

use crate::category::{Category, Weights};
use crate::error::{QuizError, QuizResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;

/// One selectable answer, carrying the points it awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub weights: Weights,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|opt| opt.label == label)
    }
}

/// Ordered question list. The position of a question is the index the
/// scoring engine matches answers against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds and validates a catalog.
    pub fn new(questions: Vec<Question>) -> QuizResult<Self> {
        let catalog = Self { questions };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The eight questions shipped with the quiz.
    pub fn builtin() -> Self {
        Self {
            questions: builtin::questions(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> QuizResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading question catalog: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_reader<R: Read>(reader: R) -> QuizResult<Self> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> QuizResult<Self> {
        let catalog: Self = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of distinct complete answer sequences. Saturates at `u128::MAX`.
    pub fn answer_space_size(&self) -> u128 {
        self.questions
            .iter()
            .fold(1u128, |acc, q| acc.saturating_mul(q.options.len() as u128))
    }

    pub fn validate(&self) -> QuizResult<()> {
        if self.is_empty() {
            return Err(QuizError::Validation(
                "catalog contains no questions".to_string(),
            ));
        }

        let mut ids = HashSet::new();
        for question in &self.questions {
            if !ids.insert(question.id) {
                return Err(QuizError::Validation(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
            if question.text.trim().is_empty() {
                return Err(QuizError::Validation(format!(
                    "question {} has empty text",
                    question.id
                )));
            }
            if question.options.is_empty() {
                return Err(QuizError::Validation(format!(
                    "question {} has no options",
                    question.id
                )));
            }

            let mut labels = HashSet::new();
            for option in &question.options {
                if option.label.trim().is_empty() {
                    return Err(QuizError::Validation(format!(
                        "question {} has an option with an empty label",
                        question.id
                    )));
                }
                if !labels.insert(option.label.as_str()) {
                    return Err(QuizError::Validation(format!(
                        "question {} lists option '{}' more than once",
                        question.id, option.label
                    )));
                }
            }
        }

        // Best-case total per category must stay within u32.
        for category in Category::iter() {
            let ceiling = self.questions.iter().try_fold(0u32, |acc, q| {
                let top = q
                    .options
                    .iter()
                    .map(|opt| opt.weights[category])
                    .max()
                    .unwrap_or(0);
                acc.checked_add(top)
            });
            if ceiling.is_none() {
                return Err(QuizError::Validation(format!(
                    "{} weights can add up to more than {}",
                    category,
                    u32::MAX
                )));
            }
        }
        Ok(())
    }
}
