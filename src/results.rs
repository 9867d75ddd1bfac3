use crate::category::Category;
use serde::Serialize;

/// Static result profile shown for a winning category.
///
/// `comment` and `next_step` follow the [`crate::markup`] convention:
/// `\n` separates paragraphs and `**text**` marks emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    #[serde(skip)]
    pub category: Category,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub comment: &'static str,
    pub next_step: &'static str,
}

static SPEED: DiagnosisResult = DiagnosisResult {
    category: Category::Speed,
    type_name: "スピード導入型",
    comment: "あなたの会社は、新しいものを**まず試してみる行動力**が強みです。\n\
              意思決定が早く、現場が自分たちで工夫しながらツールを使いこなしていく文化があります。\n\
              一方で、勢いで導入したツールが**部署ごとにバラバラに使われる**と、効果が見えにくくなることがあります。",
    next_step: "まずは**効果が出やすい業務を1つ**に絞り、2週間ほど集中して使ってみましょう。\n\
                うまくいった使い方は**社内マニュアルやテンプレート**として共有し、全社に横展開するのがおすすめです。",
};

static CAREFUL: DiagnosisResult = DiagnosisResult {
    category: Category::Careful,
    type_name: "慎重検討型",
    comment: "あなたの会社は、**リスクと費用対効果をしっかり見極める**堅実さが強みです。\n\
              導入後のトラブルが少なく、決まったことを確実に定着させる力があります。\n\
              ただし検討に時間をかけすぎると、**競合に先を越される**可能性もあります。",
    next_step: "まずは**小さな範囲での試験導入**から始めましょう。\n\
                費用のかからない無料ツールで、メール作成や議事録の要約など**身近な業務**の効果を数字で確かめると、社内の合意も得やすくなります。",
};

static IDEA: DiagnosisResult = DiagnosisResult {
    category: Category::Idea,
    type_name: "アイデア発想型",
    comment: "あなたの会社は、**新しい価値を生み出す発想力**が強みです。\n\
              企画やマーケティングの場面で、AIを「アイデアの相棒」として活用できる素地があります。\n\
              一方で、アイデアが**形になる前に立ち消えてしまう**ことがないよう、仕組みづくりも大切です。",
    next_step: "企画会議の**ブレインストーミングにAIを同席させる**ところから始めてみましょう。\n\
                キャッチコピーや画像の案出しなど、**クリエイティブ業務での活用事例**を集めて共有すると、社内の発想がさらに広がります。",
};

static DATA: DiagnosisResult = DiagnosisResult {
    category: Category::Data,
    type_name: "データ基盤型",
    comment: "あなたの会社は、**データが整理され活用できる状態にある**ことが強みです。\n\
              品質の安定や業務の標準化を重視する文化があり、AIの精度を高めやすい環境が整っています。\n\
              その反面、データを**持っているだけで活かしきれていない**ケースも少なくありません。",
    next_step: "社内データと**AIを連携させた業務の自動化**を検討しましょう。\n\
                まずは問い合わせ対応や報告書作成など、**データを参照する定型業務**から試すと、効果を実感しやすくなります。",
};

/// Looks up the static profile for a category.
pub fn result_for(category: Category) -> &'static DiagnosisResult {
    match category {
        Category::Speed => &SPEED,
        Category::Careful => &CAREFUL,
        Category::Idea => &IDEA,
        Category::Data => &DATA,
    }
}

/// All four profiles, in category declaration order.
pub fn all_results() -> [&'static DiagnosisResult; 4] {
    [&SPEED, &CAREFUL, &IDEA, &DATA]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_category_has_its_own_profile() {
        for category in Category::iter() {
            assert_eq!(result_for(category).category, category);
        }
    }

    #[test]
    fn serializes_with_display_field_names() {
        let json = serde_json::to_value(result_for(Category::Idea)).unwrap();
        assert_eq!(json["type"], "アイデア発想型");
        assert!(json.get("nextStep").is_some());
        assert!(json.get("category").is_none());
    }
}
