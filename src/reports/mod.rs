use ai_type_quiz::audit::AuditReport;
use ai_type_quiz::catalog::QuestionCatalog;
use ai_type_quiz::category::{Category, PRIORITY};
use ai_type_quiz::markup::{self, Span};
use ai_type_quiz::results::DiagnosisResult;
use ai_type_quiz::scorer::ScoreDetails;
use ai_type_quiz::session::QuestionView;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const BAR_WIDTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Ansi,
    Plain,
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn start_screen() -> String {
    let mut table = new_table();
    table.add_row(vec![Cell::new("3分でわかる！")
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)]);
    table.add_row(vec![Cell::new("あなたの会社のAI導入タイプ診断")
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)]);
    table.add_row(vec![Cell::new(
        "いくつかの簡単な質問に答えるだけで、あなたの会社に最適なAI導入の進め方がわかります。",
    )]);
    table.to_string()
}

pub fn progress_bar(number: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (number * BAR_WIDTH) / total
    };
    format!(
        "質問 {}/{} [{}{}]",
        number,
        total,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

pub fn question_card(view: &QuestionView<'_>) -> String {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new(&view.question.text).add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    for (i, option) in view.question.options.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(&option.label)]);
    }
    format!("{}\n{}", progress_bar(view.number, view.total), table)
}

/// Renders markup text as paragraphs separated by blank lines.
pub fn render_text(text: &str, style: TextStyle) -> String {
    if style == TextStyle::Plain {
        return markup::strip(text);
    }
    markup::parse(text)
        .iter()
        .map(|paragraph| {
            paragraph
                .spans
                .iter()
                .map(|span| match span {
                    Span::Emphasis(s) => format!("{BOLD}{s}{RESET}"),
                    Span::Plain(s) => s.to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn result_card(result: &DiagnosisResult, style: TextStyle) -> String {
    let mut header = new_table();
    header.add_row(vec![Cell::new("あなたの会社のAI導入タイプは...")
        .set_alignment(CellAlignment::Center)]);
    header.add_row(vec![Cell::new(result.type_name)
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)
        .set_alignment(CellAlignment::Center)]);

    format!(
        "{}\n\n== 特徴と解説 ==\n\n{}\n\n== 次の一歩 ==\n\n{}\n",
        header,
        render_text(result.comment, style),
        render_text(result.next_step, style)
    )
}

pub fn score_table(details: &ScoreDetails) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Priority").add_attribute(Attribute::Bold),
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new(""),
    ]);
    for i in [0, 2] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, category) in PRIORITY.iter().enumerate() {
        let won = *category == details.winner;
        let marker = if won { "◀ winner" } else { "" };
        let mut name = Cell::new(category);
        if won {
            name = name.add_attribute(Attribute::Bold).fg(Color::Green);
        }
        table.add_row(vec![
            Cell::new(rank + 1),
            name,
            Cell::new(details.scores.get(*category)).fg(Color::Cyan),
            Cell::new(marker),
        ]);
    }
    table
}

pub fn contributions_table(details: &ScoreDetails) -> Table {
    let mut table = new_table();
    let mut header = vec![
        Cell::new("Q").add_attribute(Attribute::Bold),
        Cell::new("Answer").add_attribute(Attribute::Bold),
    ];
    header.extend(Category::iter().map(Cell::new));
    table.set_header(header);

    for c in &details.contributions {
        let mut row = vec![Cell::new(c.question_id), Cell::new(&c.answer)];
        row.extend(Category::iter().map(|cat| Cell::new(c.weights[cat])));
        table.add_row(row);
    }
    for s in &details.skipped {
        table.add_row(vec![
            Cell::new(format!("#{}", s.index + 1)).fg(Color::Red),
            Cell::new(&s.answer).fg(Color::Red),
            Cell::new(format!("skipped: {:?}", s.reason)).fg(Color::Red),
        ]);
    }
    table
}

pub fn catalog_table(catalog: &QuestionCatalog) -> Table {
    let mut table = new_table();
    let mut header = vec![
        Cell::new("Q").add_attribute(Attribute::Bold),
        Cell::new("Option").add_attribute(Attribute::Bold),
    ];
    header.extend(Category::iter().map(Cell::new));
    table.set_header(header);

    for question in catalog.questions() {
        table.add_row(vec![
            Cell::new(question.id).add_attribute(Attribute::Bold),
            Cell::new(&question.text).add_attribute(Attribute::Bold),
        ]);
        for option in &question.options {
            let mut row = vec![Cell::new(""), Cell::new(&option.label)];
            row.extend(Category::iter().map(|cat| Cell::new(option.weights[cat])));
            table.add_row(row);
        }
    }
    table
}

pub fn audit_table(report: &AuditReport) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Wins"),
        Cell::new("Share %").fg(Color::Cyan),
    ]);
    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    for category in PRIORITY {
        table.add_row(vec![
            Cell::new(category),
            Cell::new(report.wins(category)),
            Cell::new(format!("{:.2}", report.percent(category))).fg(Color::Cyan),
        ]);
    }
    table
}
