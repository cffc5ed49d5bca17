use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days without activity tolerated before the streak resets
pub const GRACE_PERIOD_DAYS: i64 = 2;

/// Active days of the current streak, oldest first.
///
/// Never empty once initialized: a fresh streak is seeded with the day it
/// was created, and a reset reseeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Streak {
    days: Vec<NaiveDate>,
}

impl Streak {
    /// A new streak starting on `today`
    pub fn seeded(today: NaiveDate) -> Self {
        Streak { days: vec![today] }
    }

    /// Wrap already-validated days. Falls back to a seeded streak when empty.
    pub fn from_days(days: Vec<NaiveDate>, today: NaiveDate) -> Self {
        if days.is_empty() {
            Streak::seeded(today)
        } else {
            Streak { days }
        }
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Most recent active day
    pub fn last(&self) -> NaiveDate {
        // Non-empty by construction
        self.days[self.days.len() - 1]
    }

    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    pub(crate) fn days_mut(&mut self) -> &mut Vec<NaiveDate> {
        &mut self.days
    }
}

/// Growth tier of the plant, chosen by streak length
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Stage1,
    Stage2,
    Stage3,
    Stage4,
    Stage5,
    Stage6,
    Stage7,
}

impl GrowthStage {
    /// Inclusive upper bound of streak length for each stage but the last
    const THRESHOLDS: [(usize, GrowthStage); 6] = [
        (1, GrowthStage::Stage1),
        (3, GrowthStage::Stage2),
        (7, GrowthStage::Stage3),
        (13, GrowthStage::Stage4),
        (25, GrowthStage::Stage5),
        (39, GrowthStage::Stage6),
    ];

    /// Stage for a streak of `len` active days
    pub fn for_length(len: usize) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(max, _)| len <= *max)
            .map_or(GrowthStage::Stage7, |(_, stage)| *stage)
    }

    /// Stable identifier handed to the asset resolver
    pub fn id(self) -> &'static str {
        match self {
            GrowthStage::Stage1 => "stage1",
            GrowthStage::Stage2 => "stage2",
            GrowthStage::Stage3 => "stage3",
            GrowthStage::Stage4 => "stage4",
            GrowthStage::Stage5 => "stage5",
            GrowthStage::Stage6 => "stage6",
            GrowthStage::Stage7 => "stage7",
        }
    }

    /// 1-based tier number
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
