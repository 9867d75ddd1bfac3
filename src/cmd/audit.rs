use crate::reports;
use ai_type_quiz::audit::{self, AuditMode};
use ai_type_quiz::config::QuizConfig;
use ai_type_quiz::error::QuizResult;
use ai_type_quiz::scorer::Scorer;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    #[command(flatten)]
    pub config: QuizConfig,

    /// Also write the distribution to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(args: AuditArgs, config: &QuizConfig, scorer: &Scorer) -> QuizResult<()> {
    let report = audit::run(scorer, &config.audit);

    let label = match report.mode {
        AuditMode::Exhaustive => "exhaustive",
        AuditMode::Sampled => "sampled",
    };
    println!(
        "\n📊 Winning categories over {} answer sequences ({})",
        report.sequences, label
    );
    println!("{}", reports::audit_table(&report));

    if let Some(path) = &args.csv {
        report.write_csv(File::create(path)?)?;
        info!("💾 Wrote distribution to {}", path.display());
    }
    Ok(())
}
