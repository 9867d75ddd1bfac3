use crate::reports::{self, TextStyle};
use ai_type_quiz::catalog::QuestionCatalog;
use ai_type_quiz::config::QuizConfig;
use ai_type_quiz::error::QuizResult;
use ai_type_quiz::results::result_for;
use ai_type_quiz::scorer::Scorer;
use clap::Args;
use serde_json::json;

#[derive(Args, Debug, Clone)]
pub struct DiagnoseArgs {
    #[command(flatten)]
    pub config: QuizConfig,

    /// Answers in question order (repeat the flag once per question)
    #[arg(short, long = "answer")]
    pub answers: Vec<String>,

    /// Treat answers as 1-based option numbers instead of option text
    #[arg(long, default_value_t = false)]
    pub numbers: bool,

    /// Emit the score breakdown and result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub plain: bool,
}

/// Maps option numbers to labels. Anything that is not a valid number for its
/// question is passed through untouched and will be skipped by the scorer.
pub fn resolve_numbers(catalog: &QuestionCatalog, answers: &[String]) -> Vec<String> {
    answers
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let picked = catalog.get(i).and_then(|q| {
                raw.trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|n| q.options.get(n))
            });
            picked.map_or_else(|| raw.clone(), |opt| opt.label.clone())
        })
        .collect()
}

pub fn run(args: DiagnoseArgs, scorer: &Scorer) -> QuizResult<()> {
    let answers = if args.numbers {
        resolve_numbers(&scorer.catalog, &args.answers)
    } else {
        args.answers.clone()
    };

    let details = scorer.score_details(&answers);
    let result = result_for(details.winner);

    if args.json {
        let body = json!({
            "details": details,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let style = if args.plain {
        TextStyle::Plain
    } else {
        TextStyle::Ansi
    };
    println!("\n{}", reports::contributions_table(&details));
    println!("{}", reports::score_table(&details));
    println!("\n{}", reports::result_card(result, style));
    Ok(())
}
