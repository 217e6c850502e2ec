use manabi_db::util::FlattenTransaction;
use manabi_model::position::PositionKey;
use manabi_model::problem::Problem;
use manabi_model::worksheet::{PositionShift, Worksheet, WorksheetEntry};
use manabi_model_tools::convert::{IntoModel, TryIntoModel};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::worksheet::error::WorksheetError;

pub mod error;

/// Upper bound on problems in one worksheet.
pub const MAX_PROBLEMS: usize = 50;

/// Sorts a candidate problem set and assigns its initial position keys.
///
/// The order is unit code first, raw level second; candidates equal on both
/// keep their input order. Assembling the same set again therefore yields
/// the same entries with the same keys. Nothing is persisted here.
pub fn assemble(worksheet_id: Uuid, problems: &[Problem]) -> Result<Vec<WorksheetEntry>, WorksheetError> {
    if problems.is_empty() {
        return Err(WorksheetError::EmptyWorksheet);
    }
    if problems.len() > MAX_PROBLEMS {
        return Err(WorksheetError::TooManyProblems {
            count: problems.len(),
            max: MAX_PROBLEMS,
        });
    }

    let mut sorted: Vec<&Problem> = problems.iter().collect();
    sorted.sort_by(|a, b| a.unit_code.cmp(&b.unit_code).then(a.level.cmp(&b.level)));

    let keys = PositionKey::initial_sequence(sorted.len())?;
    Ok(sorted
        .into_iter()
        .zip(keys)
        .map(|(problem, position)| WorksheetEntry {
            worksheet_id,
            problem_id: problem.id,
            position,
        })
        .collect())
}

/// Creates a worksheet row plus its assembled entries in one transaction.
pub async fn create_worksheet(
    conn: &DatabaseConnection,
    name: &str,
    author_id: Uuid,
    problems: &[Problem],
) -> Result<(Worksheet, Vec<WorksheetEntry>), WorksheetError> {
    let name = name.to_owned();
    let problems = problems.to_vec();

    conn.transaction(move |txn| {
        Box::pin(async move {
            let worksheet = manabi_db::worksheet::Mutation::create_worksheet(txn, &name, author_id).await?;
            let entries = assemble(worksheet.id, &problems)?;

            let rows = entries
                .iter()
                .map(|entry| (entry.problem_id, entry.position.value()))
                .collect();
            manabi_db::worksheet::Mutation::insert_entries(txn, worksheet.id, rows).await?;

            tracing::info!(worksheet_id = %worksheet.id, problems = entries.len(), "assembled worksheet");
            Ok((worksheet.into_model(), entries))
        })
    })
    .await
    .flatten_transaction()
}

/// Moves one problem of a worksheet between two optional neighbors.
///
/// A missing `prev_problem_id` moves to the front, a missing
/// `next_problem_id` to the end. The target and the named neighbors are the
/// only rows read; the target is the only row written. The write is guarded
/// by the position the target was read at, so a concurrent move surfaces as
/// [`WorksheetError::PositionConflict`] and the whole call can be retried.
pub async fn reorder(
    conn: &DatabaseConnection,
    worksheet_id: Uuid,
    problem_id: Uuid,
    prev_problem_id: Option<Uuid>,
    next_problem_id: Option<Uuid>,
) -> Result<PositionShift, WorksheetError> {
    if prev_problem_id == Some(problem_id) || next_problem_id == Some(problem_id) {
        return Err(WorksheetError::SelfReferentialNeighbor { problem_id });
    }
    if let (Some(prev), Some(next)) = (prev_problem_id, next_problem_id)
        && prev == next
    {
        return Err(WorksheetError::DuplicateNeighbor { problem_id: prev });
    }

    conn.transaction(move |txn| {
        Box::pin(async move {
            let target = resolve_entry(txn, worksheet_id, problem_id).await?;
            let prev = match prev_problem_id {
                Some(id) => Some(resolve_entry(txn, worksheet_id, id).await?.position),
                None => None,
            };
            let next = match next_problem_id {
                Some(id) => Some(resolve_entry(txn, worksheet_id, id).await?.position),
                None => None,
            };

            let updated = PositionKey::between(prev, next)?;
            let moved = manabi_db::worksheet::Mutation::shift_position(
                txn,
                worksheet_id,
                problem_id,
                target.position.value(),
                updated.value(),
            )
            .await?;
            if moved == 0 {
                return Err(WorksheetError::PositionConflict {
                    worksheet_id,
                    problem_id,
                });
            }

            Ok(PositionShift {
                previous: target.position,
                updated,
            })
        })
    })
    .await
    .flatten_transaction()
}

/// Renumbers a worksheet back to unit-spaced keys in its current order and
/// returns the number of rewritten entries.
///
/// Every move between the same two neighbors halves the remaining key gap;
/// this pass restores the key space once [`reorder`] reports it exhausted.
pub async fn rebalance(conn: &DatabaseConnection, worksheet_id: Uuid) -> Result<u64, WorksheetError> {
    conn.transaction(move |txn| {
        Box::pin(async move {
            let entries = manabi_db::worksheet::Query::get_entries(txn, worksheet_id).await?;
            if entries.is_empty() {
                return Ok(0);
            }

            let keys = PositionKey::initial_sequence(entries.len())?;
            let mut rewritten = 0;
            for (entry, key) in entries.into_iter().zip(keys) {
                if entry.position == key.value() {
                    continue;
                }
                manabi_db::worksheet::Mutation::set_position(txn, worksheet_id, entry.problem_id, key.value()).await?;
                rewritten += 1;
            }

            tracing::info!(%worksheet_id, rewritten, "rebalanced worksheet positions");
            Ok(rewritten)
        })
    })
    .await
    .flatten_transaction()
}

async fn resolve_entry<C: ConnectionTrait>(
    conn: &C,
    worksheet_id: Uuid,
    problem_id: Uuid,
) -> Result<WorksheetEntry, WorksheetError> {
    let entry = manabi_db::worksheet::Query::get_entry(conn, worksheet_id, problem_id)
        .await?
        .ok_or(WorksheetError::EntryNotFound {
            worksheet_id,
            problem_id,
        })?;
    Ok(entry.try_into_model()?)
}
