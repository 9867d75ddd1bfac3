//! Answer-space balance check: how often each category wins across every
//! possible (or a random sample of) complete answer sequences.

use crate::category::{Category, ScoreVector};
use crate::config::AuditParams;
use crate::error::QuizResult;
use crate::scorer::Scorer;
use serde::Serialize;
use std::io::Write;
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditMode {
    Exhaustive,
    Sampled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub wins: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub mode: AuditMode,
    pub sequences: u64,
    pub shares: Vec<CategoryShare>,
}

impl AuditReport {
    pub fn wins(&self, category: Category) -> u64 {
        self.shares
            .iter()
            .find(|s| s.category == category)
            .map_or(0, |s| s.wins)
    }

    pub fn percent(&self, category: Category) -> f64 {
        if self.sequences == 0 {
            return 0.0;
        }
        self.wins(category) as f64 / self.sequences as f64 * 100.0
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> QuizResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["category", "wins", "percent"])?;
        for share in &self.shares {
            wtr.write_record([
                share.category.to_string(),
                share.wins.to_string(),
                format!("{:.4}", self.percent(share.category)),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

pub fn run(scorer: &Scorer, params: &AuditParams) -> AuditReport {
    let catalog = &scorer.catalog;
    let space = catalog.answer_space_size();
    let mut tally = [0u64; 4];

    let (mode, sequences) = if space <= u128::from(params.audit_sample_limit) {
        info!("🔎 Enumerating all {} answer sequences", space);
        let mut digits = vec![0usize; catalog.len()];
        let mut count = 0u64;
        loop {
            tally[score_digits(scorer, &digits).winner().column()] += 1;
            count += 1;
            if !advance(&mut digits, scorer) {
                break;
            }
        }
        (AuditMode::Exhaustive, count)
    } else {
        info!(
            "🎲 Answer space has {} sequences; sampling {} (seed {})",
            space, params.audit_samples, params.audit_seed
        );
        let mut rng = fastrand::Rng::with_seed(params.audit_seed);
        let mut digits = vec![0usize; catalog.len()];
        for _ in 0..params.audit_samples {
            for (digit, question) in digits.iter_mut().zip(catalog.questions()) {
                *digit = rng.usize(..question.options.len());
            }
            tally[score_digits(scorer, &digits).winner().column()] += 1;
        }
        (AuditMode::Sampled, params.audit_samples)
    };

    AuditReport {
        mode,
        sequences,
        shares: Category::iter()
            .map(|category| CategoryShare {
                category,
                wins: tally[category.column()],
            })
            .collect(),
    }
}

/// Scores a sequence given as option positions, one per question.
fn score_digits(scorer: &Scorer, digits: &[usize]) -> ScoreVector {
    let answers: Vec<&str> = digits
        .iter()
        .zip(scorer.catalog.questions())
        .map(|(&d, q)| q.options[d].label.as_str())
        .collect();
    scorer.score_full(&answers)
}

/// Mixed-radix increment over option positions. Returns false after the last
/// sequence.
fn advance(digits: &mut [usize], scorer: &Scorer) -> bool {
    for (digit, question) in digits.iter_mut().zip(scorer.catalog.questions()).rev() {
        *digit += 1;
        if *digit < question.options.len() {
            return true;
        }
        *digit = 0;
    }
    false
}
