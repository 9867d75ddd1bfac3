use ai_type_quiz::catalog::QuestionCatalog;
use ai_type_quiz::config::QuizConfig;
use ai_type_quiz::error::QuizResult;
use ai_type_quiz::scorer::Scorer;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "AI adoption type diagnosis quiz", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Question catalog JSON (defaults to the built-in questions)
    #[arg(global = true, long)]
    catalog: Option<PathBuf>,

    /// Settings JSON; flags given on the command line take precedence
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the quiz interactively (default)
    Run(cmd::run::RunArgs),
    /// Score a given answer sequence
    Diagnose(cmd::diagnose::DiagnoseArgs),
    /// Check the question catalog and result texts
    Validate(cmd::validate::ValidateArgs),
    /// Show how often each type wins across the answer space
    Audit(cmd::audit::AuditArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .init();

    if let Err(e) = execute(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn execute(cli: Cli, matches: &ArgMatches) -> QuizResult<()> {
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(cmd::run::RunArgs::default()));

    let (cli_config, sub_matches) = match &command {
        Commands::Run(args) => (&args.config, matches.subcommand_matches("run")),
        Commands::Diagnose(args) => (&args.config, matches.subcommand_matches("diagnose")),
        Commands::Validate(args) => (&args.config, matches.subcommand_matches("validate")),
        Commands::Audit(args) => (&args.config, matches.subcommand_matches("audit")),
    };

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path.display());
            let mut file_config = QuizConfig::load_from_file(path)?;
            if let Some(sub) = sub_matches {
                file_config.merge_from_cli(cli_config, sub);
            }
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;

    let catalog = match &cli.catalog {
        Some(path) => QuestionCatalog::load_from_file(path)?,
        None => QuestionCatalog::builtin(),
    };
    let scorer = Scorer::new(catalog);

    match command {
        Commands::Run(args) => {
            let stdin = io::stdin();
            cmd::run::run(&args, &config, &scorer, stdin.lock(), io::stdout())
        }
        Commands::Diagnose(args) => cmd::diagnose::run(args, &scorer),
        Commands::Validate(args) => cmd::validate::run(args, &scorer),
        Commands::Audit(args) => cmd::audit::run(args, &config, &scorer),
    }
}
