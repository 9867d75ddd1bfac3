use crate::reports;
use ai_type_quiz::config::QuizConfig;
use ai_type_quiz::error::{QuizError, QuizResult};
use ai_type_quiz::markup;
use ai_type_quiz::results::all_results;
use ai_type_quiz::scorer::Scorer;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: QuizConfig,

    /// Only report the verdict, skip the catalog listing
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

/// Checks the catalog and the static result texts.
pub fn check(scorer: &Scorer) -> QuizResult<()> {
    scorer.catalog.validate()?;

    for result in all_results() {
        for (field, text) in [("comment", result.comment), ("nextStep", result.next_step)] {
            if !markup::is_balanced(text) {
                return Err(QuizError::Validation(format!(
                    "{} of '{}' has an unmatched emphasis marker",
                    field, result.type_name
                )));
            }
        }
    }
    info!("markup of {} result profiles is balanced", all_results().len());
    Ok(())
}

pub fn run(args: ValidateArgs, scorer: &Scorer) -> QuizResult<()> {
    println!("\n🔎 === CATALOG AUDIT === 🔎");
    check(scorer)?;

    if !args.quiet {
        println!("{}", reports::catalog_table(&scorer.catalog));
    }
    println!(
        "✅ Catalog OK: {} questions, {} answer sequences",
        scorer.catalog.len(),
        scorer.catalog.answer_space_size()
    );
    Ok(())
}
