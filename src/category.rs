use serde::{Deserialize, Serialize};
use std::ops::Index;
use strum_macros::{Display, EnumIter, EnumString};

/// The four diagnosis classes a session can end up in.
///
/// Declaration order matches the column order of a [`Weights`] tuple:
/// `speed, careful, idea, data`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Speed,
    Careful,
    Idea,
    Data,
}

/// Tie-break order used when picking the winner. Earlier entries keep the
/// lead on equal scores.
pub const PRIORITY: [Category; 4] = [
    Category::Speed,
    Category::Idea,
    Category::Data,
    Category::Careful,
];

impl Category {
    /// Column of this category inside a weight tuple / score vector.
    #[inline(always)]
    pub const fn column(self) -> usize {
        match self {
            Self::Speed => 0,
            Self::Careful => 1,
            Self::Idea => 2,
            Self::Data => 3,
        }
    }
}

/// Per-category points awarded for choosing one answer option.
/// Serialized as a bare `[speed, careful, idea, data]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weights(pub [u32; 4]);

impl Weights {
    pub const fn new(speed: u32, careful: u32, idea: u32, data: u32) -> Self {
        Self([speed, careful, idea, data])
    }
}

impl Index<Category> for Weights {
    type Output = u32;

    fn index(&self, category: Category) -> &u32 {
        &self.0[category.column()]
    }
}

/// Running per-category totals. Starts at zero and only ever grows.
/// Accumulates in `u64` so that any sum of `u32` weights a catalog can
/// hold fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreVector {
    pub speed: u64,
    pub careful: u64,
    pub idea: u64,
    pub data: u64,
}

impl ScoreVector {
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Speed => self.speed,
            Category::Careful => self.careful,
            Category::Idea => self.idea,
            Category::Data => self.data,
        }
    }

    pub fn add(&mut self, weights: &Weights) {
        self.speed += u64::from(weights[Category::Speed]);
        self.careful += u64::from(weights[Category::Careful]);
        self.idea += u64::from(weights[Category::Idea]);
        self.data += u64::from(weights[Category::Data]);
    }

    /// Picks the highest-scoring category, walking [`PRIORITY`] so that ties
    /// resolve the same way on every platform.
    pub fn winner(&self) -> Category {
        let mut best_score: i128 = -1;
        let mut best = Category::Careful;

        for category in PRIORITY {
            let score = i128::from(self.get(category));
            if score > best_score {
                best_score = score;
                best = category;
            }
        }
        best
    }
}
