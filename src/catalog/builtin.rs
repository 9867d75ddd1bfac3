use super::{AnswerOption, Question};
use crate::category::Weights;

// Weight columns: [speed, careful, idea, data]
const QUESTIONS: [(u32, &str, [(&str, Weights); 4]); 8] = [
    (
        1,
        "あなたの会社の従業員数は？",
        [
            ("10人未満", Weights::new(2, 0, 1, 0)),
            ("10人〜100人未満", Weights::new(1, 1, 1, 1)),
            ("100人〜1,000人未満", Weights::new(0, 2, 0, 2)),
            ("1,000人以上", Weights::new(0, 3, 0, 3)),
        ],
    ),
    (
        2,
        "社内での生成AIの利用状況は？",
        [
            ("全く使っていない", Weights::new(0, 2, 0, 0)),
            ("一部の人が個人的に使っている", Weights::new(1, 1, 1, 0)),
            ("特定の部署で公式に利用している", Weights::new(2, 0, 1, 1)),
            ("全社的に活用している", Weights::new(3, 0, 1, 2)),
        ],
    ),
    (
        3,
        "社内で最も多い業務は？",
        [
            ("資料作成やデータ入力", Weights::new(1, 1, 0, 2)),
            ("顧客対応（メール、チャット、電話）", Weights::new(1, 1, 0, 1)),
            ("製品の製造や管理", Weights::new(0, 2, 0, 1)),
            ("企画やマーケティング", Weights::new(1, 0, 3, 1)),
        ],
    ),
    (
        4,
        "AIに最も助けてほしい課題は？",
        [
            ("人手不足を補いたい", Weights::new(2, 1, 0, 0)),
            ("単純作業の時間を削減したい", Weights::new(2, 1, 0, 1)),
            ("業務の品質のムラをなくしたい", Weights::new(0, 2, 0, 3)),
            ("コストを削減したい", Weights::new(1, 3, 0, 0)),
        ],
    ),
    (
        5,
        "新しいツールを導入するとき、社内の反応は？",
        [
            ("とりあえず使ってみよう！と積極的", Weights::new(3, 0, 2, 0)),
            ("まずは一部の部署で試してみる", Weights::new(1, 1, 1, 1)),
            ("費用対効果を慎重に検討する", Weights::new(0, 3, 0, 1)),
            ("変化には抵抗がある", Weights::new(0, 3, 0, 0)),
        ],
    ),
    (
        6,
        "社内のデータは主にどこにありますか？",
        [
            ("ほとんどが紙の書類", Weights::new(0, 2, 0, 0)),
            ("個人のPCや共有サーバー内", Weights::new(1, 1, 0, 1)),
            ("Google DriveやDropboxなどのクラウド上", Weights::new(2, 0, 1, 2)),
            ("専門のデータベースシステムで管理", Weights::new(1, 0, 1, 3)),
        ],
    ),
    (
        7,
        "新しい施策の導入を決めるまでにかかる時間は？",
        [
            ("1ヶ月未満で即決", Weights::new(3, 0, 1, 0)),
            ("1〜3ヶ月程度", Weights::new(1, 1, 1, 1)),
            ("半年以上かけてじっくり", Weights::new(0, 3, 0, 1)),
            ("ケースバイケースで予測不能", Weights::new(0, 1, 0, 0)),
        ],
    ),
    (
        8,
        "AI導入で最も期待する効果は？",
        [
            ("大幅なコスト削減", Weights::new(1, 3, 0, 0)),
            ("新しい売上や事業の創出", Weights::new(1, 0, 3, 1)),
            ("既存業務の圧倒的な効率化", Weights::new(3, 1, 0, 1)),
            ("従業員の創造性向上", Weights::new(1, 0, 3, 0)),
        ],
    ),
];

pub(super) fn questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|(id, text, options)| Question {
            id: *id,
            text: text.to_string(),
            options: options
                .iter()
                .map(|(label, weights)| AnswerOption {
                    label: label.to_string(),
                    weights: *weights,
                })
                .collect(),
        })
        .collect()
}
