use ai_type_quiz::catalog::QuestionCatalog;
use ai_type_quiz::error::QuizError;
use ai_type_quiz::scorer::Scorer;
use rstest::rstest;
use std::fs;

#[test]
fn builtin_catalog_survives_a_json_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, serde_json::to_string_pretty(&QuestionCatalog::builtin()).unwrap()).unwrap();

    let loaded = QuestionCatalog::load_from_file(&path).unwrap();
    assert_eq!(loaded, QuestionCatalog::builtin());
}

#[test]
fn custom_catalog_drives_the_scorer() {
    let json = r#"{
        "questions": [
            { "id": 10, "text": "朝型ですか？", "options": [
                { "label": "はい", "weights": [0, 0, 0, 5] },
                { "label": "いいえ", "weights": [0, 0, 5, 0] }
            ] }
        ]
    }"#;
    let scorer = Scorer::new(QuestionCatalog::from_json(json).unwrap());
    assert_eq!(scorer.diagnose(&["はい"]).type_name, "データ基盤型");
    assert_eq!(scorer.diagnose(&["いいえ"]).type_name, "アイデア発想型");
    assert_eq!(scorer.catalog.answer_space_size(), 2);
}

#[test]
fn reader_and_string_loaders_agree() {
    let json = serde_json::to_vec(&QuestionCatalog::builtin()).unwrap();
    let from_reader = QuestionCatalog::from_reader(json.as_slice()).unwrap();
    let from_str = QuestionCatalog::from_json(std::str::from_utf8(&json).unwrap()).unwrap();
    assert_eq!(from_reader, from_str);
}

#[rstest]
#[case::empty(r#"{ "questions": [] }"#)]
#[case::blank_text(r#"{ "questions": [ { "id": 1, "text": " ", "options": [ { "label": "a", "weights": [1,0,0,0] } ] } ] }"#)]
#[case::blank_label(r#"{ "questions": [ { "id": 1, "text": "q", "options": [ { "label": "", "weights": [1,0,0,0] } ] } ] }"#)]
fn structurally_invalid_catalogs_fail_validation(#[case] json: &str) {
    let err = QuestionCatalog::from_json(json).unwrap_err();
    assert!(matches!(err, QuizError::Validation(_)), "{err}");
}

#[rstest]
#[case::short_weights(r#"{ "questions": [ { "id": 1, "text": "q", "options": [ { "label": "a", "weights": [1,0,0] } ] } ] }"#)]
#[case::negative_weight(r#"{ "questions": [ { "id": 1, "text": "q", "options": [ { "label": "a", "weights": [-1,0,0,0] } ] } ] }"#)]
#[case::not_json("questions: []")]
fn malformed_catalogs_fail_to_parse(#[case] json: &str) {
    let err = QuestionCatalog::from_json(json).unwrap_err();
    assert!(matches!(err, QuizError::Json(_)), "{err}");
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuestionCatalog::load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, QuizError::Io(_)));
}

fn two_question_catalog(first: [u32; 4], second: [u32; 4]) -> String {
    serde_json::json!({
        "questions": [
            { "id": 1, "text": "q1", "options": [ { "label": "x", "weights": first } ] },
            { "id": 2, "text": "q2", "options": [ { "label": "x", "weights": second } ] }
        ]
    })
    .to_string()
}

#[test]
fn weights_that_could_overflow_a_total_are_rejected() {
    let json = two_question_catalog([u32::MAX, 0, 0, 0], [1, 0, 0, 1]);
    let err = QuestionCatalog::from_json(&json).unwrap_err();
    assert!(matches!(err, QuizError::Validation(_)), "{err}");
    assert!(err.to_string().contains("speed"));
}

#[test]
fn weights_at_the_limit_score_exactly() {
    let json = two_question_catalog([u32::MAX - 1, 0, 0, 0], [0, 0, 0, u32::MAX]);
    let scorer = Scorer::new(QuestionCatalog::from_json(&json).unwrap());

    let scores = scorer.score_full(&["x", "x"]);
    assert_eq!(scores.speed, u64::from(u32::MAX) - 1);
    assert_eq!(scores.data, u64::from(u32::MAX));
    assert_eq!(scorer.diagnose(&["x", "x"]).type_name, "データ基盤型");
}
