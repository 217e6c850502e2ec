use serde::{Deserialize, Serialize};
use strum::EnumIter;
use utoipa::ToSchema;

/// Buckets the raw problem levels 1..=5 are partitioned into.
#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Low,
    Mid,
    High,
}

impl DifficultyTier {
    /// Raw levels belonging to this tier.
    pub fn levels(self) -> &'static [i32] {
        match self {
            DifficultyTier::Low => &[1],
            DifficultyTier::Mid => &[2, 3, 4],
            DifficultyTier::High => &[5],
        }
    }

    pub fn from_level(level: i32) -> Option<DifficultyTier> {
        match level {
            1 => Some(DifficultyTier::Low),
            2..=4 => Some(DifficultyTier::Mid),
            5 => Some(DifficultyTier::High),
            _ => None,
        }
    }
}

/// Requested difficulty emphasis for a whole worksheet.
#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorksheetDifficulty {
    Low,
    Middle,
    High,
}

impl WorksheetDifficulty {
    /// Target share per tier. The three shares always sum to 1.0.
    pub fn ratios(self) -> TierRatios {
        match self {
            WorksheetDifficulty::Low => TierRatios {
                low: 0.5,
                mid: 0.3,
                high: 0.2,
            },
            WorksheetDifficulty::Middle => TierRatios {
                low: 0.25,
                mid: 0.5,
                high: 0.25,
            },
            WorksheetDifficulty::High => TierRatios {
                low: 0.2,
                mid: 0.3,
                high: 0.5,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRatios {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl TierRatios {
    /// Ideal per-tier counts for a requested total, ignoring inventory.
    ///
    /// Low and mid round down; the high tier absorbs the remainder so the
    /// three counts sum to `total` for every input.
    pub fn ideal_counts(&self, total: u64) -> (u64, u64, u64) {
        let low = (total as f64 * self.low).floor() as u64;
        let mid = (total as f64 * self.mid).floor() as u64;
        let high = total - low - mid;
        (low, mid, high)
    }
}

/// Real inventory per tier for one problem filter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TierInventory {
    pub low: u64,
    pub mid: u64,
    pub high: u64,
}

impl TierInventory {
    pub fn total(&self) -> u64 {
        self.low + self.mid + self.high
    }

    pub fn for_tier(&self, tier: DifficultyTier) -> u64 {
        match tier {
            DifficultyTier::Low => self.low,
            DifficultyTier::Mid => self.mid,
            DifficultyTier::High => self.high,
        }
    }
}

/// Per-tier fetch counts a search issues against the problem pool.
#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct FetchPlan {
    pub low_count: u64,
    pub mid_count: u64,
    pub high_count: u64,
    pub total_count: u64,
}
