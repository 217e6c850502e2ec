use manabi_model::difficulty::{DifficultyTier, TierInventory, WorksheetDifficulty};
use manabi_model::problem::{Problem, ProblemType};
use manabi_model_tools::convert::{IntoDbModel, TryIntoModel};
use sea_orm::DatabaseConnection;
use tokio::try_join;

use crate::distribution;
use crate::search::error::SearchError;

pub mod error;

/// Fetches a difficulty-balanced problem set for the given unit filter.
///
/// Counts the inventory per tier, plans the per-tier fetch counts and pulls
/// at most the planned number of problems out of each tier. The result can
/// be smaller than `requested` when the pool runs dry; deciding whether a
/// partial set is acceptable is the caller's business.
pub async fn search_problems(
    conn: &DatabaseConnection,
    unit_codes: &[String],
    problem_type: Option<ProblemType>,
    difficulty: WorksheetDifficulty,
    requested: u64,
) -> Result<Vec<Problem>, SearchError> {
    let db_problem_type = problem_type.map(IntoDbModel::into_db_model);

    let (low, mid, high) = try_join!(
        manabi_db::problem::Query::count_by_levels(conn, unit_codes, db_problem_type, DifficultyTier::Low.levels()),
        manabi_db::problem::Query::count_by_levels(conn, unit_codes, db_problem_type, DifficultyTier::Mid.levels()),
        manabi_db::problem::Query::count_by_levels(conn, unit_codes, db_problem_type, DifficultyTier::High.levels()),
    )?;
    let available = TierInventory { low, mid, high };

    // Never plan for more than the pool can deliver.
    let requested = requested.min(available.total());
    let plan = distribution::plan(difficulty, requested, &available);
    tracing::debug!(?plan, ?difficulty, "planned per-tier fetch counts");

    let mut problems: Vec<Problem> = Vec::with_capacity(plan.total_count as usize);
    for (tier, count) in [
        (DifficultyTier::Low, plan.low_count),
        (DifficultyTier::Mid, plan.mid_count),
        (DifficultyTier::High, plan.high_count),
    ] {
        if count == 0 {
            continue;
        }
        let rows =
            manabi_db::problem::Query::find_by_levels(conn, unit_codes, db_problem_type, tier.levels(), count).await?;
        for row in rows {
            problems.push(row.try_into_model()?);
        }
    }

    problems.sort_by(|a, b| a.unit_code.cmp(&b.unit_code).then(a.level.cmp(&b.level)));
    Ok(problems)
}
