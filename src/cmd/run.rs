use crate::reports::{self, TextStyle};
use ai_type_quiz::config::QuizConfig;
use ai_type_quiz::error::QuizResult;
use ai_type_quiz::scorer::Scorer;
use ai_type_quiz::session::{QuizSession, QuizState};
use clap::Args;
use std::io::{BufRead, Write};
use std::thread;
use tracing::debug;

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: QuizConfig,

    /// Print emphasis without terminal escape codes
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}

/// Interactive quiz over any line-based input and output.
pub fn run<R: BufRead, W: Write>(
    args: &RunArgs,
    config: &QuizConfig,
    scorer: &Scorer,
    mut input: R,
    mut out: W,
) -> QuizResult<()> {
    let style = if args.plain {
        TextStyle::Plain
    } else {
        TextStyle::Ansi
    };
    let mut session = QuizSession::new(scorer);

    writeln!(out, "{}", reports::start_screen())?;
    write!(out, "Enter で診断スタート (q で終了): ")?;
    out.flush()?;
    match read_line(&mut input)? {
        Some(line) if !line.eq_ignore_ascii_case("q") => {}
        _ => return Ok(()),
    }

    loop {
        session.start();

        while let Some(view) = session.current_question() {
            writeln!(out, "\n{}", reports::question_card(&view))?;
            let option_count = view.question.options.len();

            let label = loop {
                write!(out, "番号を入力してください (1-{option_count}): ")?;
                out.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    debug!("input closed mid-quiz");
                    return Ok(());
                };
                match line.parse::<usize>() {
                    Ok(n) if (1..=option_count).contains(&n) => {
                        break view.question.options[n - 1].label.clone();
                    }
                    _ => writeln!(out, "1〜{option_count} の番号を入力してください。")?,
                }
            };
            session.answer(&label)?;
        }

        writeln!(out, "\nあなたの会社を分析中...")?;
        out.flush()?;
        thread::sleep(config.session.loading_delay());

        match session.complete()? {
            QuizState::Finished(result) => {
                writeln!(out, "\n{}", reports::result_card(result, style))?;
            }
            QuizState::Error(message) => {
                writeln!(out, "\nエラーが発生しました\n{message}")?;
            }
            other => debug!("unexpected state after completion: {:?}", other),
        }

        write!(out, "もう一度診断しますか？ [y/N]: ")?;
        out.flush()?;
        match read_line(&mut input)? {
            Some(line) if line.eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }
    Ok(())
}

/// Next trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> QuizResult<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quick_config() -> QuizConfig {
        let mut config = QuizConfig::default();
        config.session.loading_delay_ms = 0;
        config
    }

    fn play(script: &str) -> String {
        let scorer = Scorer::default();
        let args = RunArgs {
            plain: true,
            ..RunArgs::default()
        };
        let mut out = Vec::new();
        run(&args, &quick_config(), &scorer, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_pass_prints_result_card() {
        // Second option everywhere: 10人〜100人未満, 一部の人が..., etc.
        let output = play("\n2\n2\n2\n2\n2\n2\n2\n2\nn\n");
        assert!(output.contains("質問 8/8"));
        assert!(output.contains("あなたの会社のAI導入タイプは..."));
        assert!(output.contains("次の一歩"));
    }

    #[test]
    fn invalid_choice_is_asked_again() {
        let output = play("\n9\nabc\n1\n");
        assert!(output.contains("1〜4 の番号を入力してください。"));
        assert!(output.contains("質問 2/8"));
    }

    #[test]
    fn restart_runs_a_second_pass() {
        let output = play("\n1\n1\n1\n1\n1\n1\n1\n1\ny\n1\n");
        assert_eq!(output.matches("質問 1/8").count(), 2);
    }

    #[test]
    fn quitting_at_start_screen_asks_nothing() {
        let output = play("q\n");
        assert!(!output.contains("質問 1/8"));
    }
}
