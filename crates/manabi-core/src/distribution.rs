use manabi_model::difficulty::{DifficultyTier, FetchPlan, TierInventory, WorksheetDifficulty};

/// Best achievable per-tier fetch counts for a requested total.
///
/// Starts from the ideal split for the difficulty emphasis, caps every tier
/// at its real inventory and refills the shortfall in fixed tier order low,
/// mid, high. The resulting total is at most `requested`; a pool that cannot
/// cover the request yields a smaller plan, not an error.
pub fn plan(difficulty: WorksheetDifficulty, requested: u64, available: &TierInventory) -> FetchPlan {
    let (ideal_low, ideal_mid, ideal_high) = difficulty.ratios().ideal_counts(requested);

    let mut planned = [
        (DifficultyTier::Low, ideal_low.min(available.low)),
        (DifficultyTier::Mid, ideal_mid.min(available.mid)),
        (DifficultyTier::High, ideal_high.min(available.high)),
    ];

    let mut shortfall = requested - planned.iter().map(|(_, count)| count).sum::<u64>();
    for (tier, count) in &mut planned {
        if shortfall == 0 {
            break;
        }
        let headroom = available.for_tier(*tier) - *count;
        let extra = shortfall.min(headroom);
        *count += extra;
        shortfall -= extra;
    }

    let [(_, low_count), (_, mid_count), (_, high_count)] = planned;
    FetchPlan {
        low_count,
        mid_count,
        high_count,
        total_count: low_count + mid_count + high_count,
    }
}
