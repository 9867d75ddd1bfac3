use super::types::{Contribution, ScoreDetails, SkipReason, SkippedAnswer};
use crate::catalog::{AnswerOption, QuestionCatalog};
use crate::category::ScoreVector;
use tracing::warn;

/// Resolves the option chosen at `index`, or why the answer cannot count.
fn lookup<'c>(
    catalog: &'c QuestionCatalog,
    index: usize,
    answer: &str,
) -> Result<(u32, &'c AnswerOption), SkipReason> {
    let question = catalog.get(index).ok_or(SkipReason::OutOfRange)?;
    let option = question.option(answer).ok_or(SkipReason::UnknownOption)?;
    Ok((question.id, option))
}

fn report_skip(index: usize, answer: &str, reason: SkipReason) {
    warn!(
        "⚠️  Ignoring answer #{} '{}' ({:?}); it contributes no points",
        index + 1,
        answer,
        reason
    );
}

/// Totals only. Used on the hot path of the answer-space audit.
pub fn score_full<S: AsRef<str>>(catalog: &QuestionCatalog, answers: &[S]) -> ScoreVector {
    let mut scores = ScoreVector::default();

    for (index, answer) in answers.iter().enumerate() {
        let answer = answer.as_ref();
        match lookup(catalog, index, answer) {
            Ok((_, option)) => scores.add(&option.weights),
            Err(reason) => report_skip(index, answer, reason),
        }
    }
    scores
}

/// Totals plus a per-answer breakdown.
pub fn score_details<S: AsRef<str>>(catalog: &QuestionCatalog, answers: &[S]) -> ScoreDetails {
    let mut scores = ScoreVector::default();
    let mut contributions = Vec::with_capacity(answers.len().min(catalog.len()));
    let mut skipped = Vec::new();

    for (index, answer) in answers.iter().enumerate() {
        let answer = answer.as_ref();
        match lookup(catalog, index, answer) {
            Ok((question_id, option)) => {
                scores.add(&option.weights);
                contributions.push(Contribution {
                    index,
                    question_id,
                    answer: answer.to_string(),
                    weights: option.weights,
                });
            }
            Err(reason) => {
                report_skip(index, answer, reason);
                skipped.push(SkippedAnswer {
                    index,
                    answer: answer.to_string(),
                    reason,
                });
            }
        }
    }

    ScoreDetails {
        winner: scores.winner(),
        scores,
        contributions,
        skipped,
    }
}
