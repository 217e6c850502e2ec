mod common;

use crate::common::{create_test_problem, setup_schema};

use manabi_core::worksheet::error::WorksheetError;
use manabi_model::position::error::PositionError;
use manabi_model::problem::Problem;
use manabi_model_tools::convert::TryIntoModel;
use sea_orm::Database;
use test_log::test;
use uuid::Uuid;

async fn seeded_problems(conn: &sea_orm::DatabaseConnection) -> Vec<Problem> {
    let mut problems = Vec::new();
    for (unit_code, level) in [("uc-1501", 3), ("uc-1502", 1), ("uc-1501", 1), ("uc-1503", 5)] {
        let model = create_test_problem(conn, unit_code, level).await;
        problems.push(model.try_into_model().unwrap());
    }
    problems
}

#[test(tokio::test)]
async fn test_create_worksheet_persists_the_assembled_order() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();
    let problems = seeded_problems(conn).await;

    let author_id = Uuid::new_v4();
    let (worksheet, entries) = manabi_core::worksheet::create_worksheet(conn, "midterm prep", author_id, &problems)
        .await
        .unwrap();
    assert_eq!(worksheet.name, "midterm prep");
    assert_eq!(worksheet.author_id, author_id);

    // (uc-1501, 1), (uc-1501, 3), (uc-1502, 1), (uc-1503, 5)
    let expected_order = [problems[2].id, problems[0].id, problems[1].id, problems[3].id];
    let assembled: Vec<Uuid> = entries.iter().map(|entry| entry.problem_id).collect();
    assert_eq!(assembled, expected_order);

    let stored = manabi_db::worksheet::Query::get_entries(conn, worksheet.id).await.unwrap();
    let stored_order: Vec<Uuid> = stored.iter().map(|entry| entry.problem_id).collect();
    assert_eq!(stored_order, expected_order);
    let positions: Vec<f64> = stored.iter().map(|entry| entry.position).collect();
    assert_eq!(positions, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test(tokio::test)]
async fn test_create_worksheet_rejects_an_empty_set() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let result = manabi_core::worksheet::create_worksheet(conn, "empty", Uuid::new_v4(), &[]).await;
    assert!(matches!(result, Err(WorksheetError::EmptyWorksheet)));
}

#[test(tokio::test)]
async fn test_reorder_touches_only_the_moved_entry() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();
    let problems = seeded_problems(conn).await;

    let (worksheet, entries) = manabi_core::worksheet::create_worksheet(conn, "drill", Uuid::new_v4(), &problems)
        .await
        .unwrap();
    let before = manabi_db::worksheet::Query::get_entries(conn, worksheet.id).await.unwrap();

    // Move the last entry between the first and second one.
    let target = entries[3].problem_id;
    let shift = manabi_core::worksheet::reorder(
        conn,
        worksheet.id,
        target,
        Some(entries[0].problem_id),
        Some(entries[1].problem_id),
    )
    .await
    .unwrap();
    assert_eq!(shift.previous.value(), 4.0);
    assert_eq!(shift.updated.value(), 1.5);

    let after = manabi_db::worksheet::Query::get_entries(conn, worksheet.id).await.unwrap();
    let order: Vec<Uuid> = after.iter().map(|entry| entry.problem_id).collect();
    assert_eq!(
        order,
        vec![
            entries[0].problem_id,
            target,
            entries[1].problem_id,
            entries[2].problem_id
        ]
    );

    // Every other row is bit-identical to its pre-reorder state.
    for entry in &after {
        if entry.problem_id == target {
            continue;
        }
        let untouched = before.iter().find(|e| e.problem_id == entry.problem_id).unwrap();
        assert_eq!(entry.position.to_bits(), untouched.position.to_bits());
    }
}

#[test(tokio::test)]
async fn test_reorder_to_front_and_back() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();
    let problems = seeded_problems(conn).await;

    let (worksheet, entries) = manabi_core::worksheet::create_worksheet(conn, "drill", Uuid::new_v4(), &problems)
        .await
        .unwrap();

    let shift = manabi_core::worksheet::reorder(
        conn,
        worksheet.id,
        entries[2].problem_id,
        None,
        Some(entries[0].problem_id),
    )
    .await
    .unwrap();
    assert_eq!(shift.updated.value(), 0.5);

    let shift = manabi_core::worksheet::reorder(
        conn,
        worksheet.id,
        entries[0].problem_id,
        Some(entries[3].problem_id),
        None,
    )
    .await
    .unwrap();
    assert_eq!(shift.updated.value(), 5.0);

    let order: Vec<Uuid> = manabi_db::worksheet::Query::get_entries(conn, worksheet.id)
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.problem_id)
        .collect();
    assert_eq!(
        order,
        vec![
            entries[2].problem_id,
            entries[1].problem_id,
            entries[3].problem_id,
            entries[0].problem_id
        ]
    );
}

#[test(tokio::test)]
async fn test_reorder_validates_its_neighbors() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();
    let problems = seeded_problems(conn).await;

    let (worksheet, entries) = manabi_core::worksheet::create_worksheet(conn, "drill", Uuid::new_v4(), &problems)
        .await
        .unwrap();
    let target = entries[1].problem_id;

    let result = manabi_core::worksheet::reorder(conn, worksheet.id, target, Some(target), None).await;
    assert!(matches!(result, Err(WorksheetError::SelfReferentialNeighbor { .. })));

    let result = manabi_core::worksheet::reorder(
        conn,
        worksheet.id,
        target,
        Some(entries[0].problem_id),
        Some(entries[0].problem_id),
    )
    .await;
    assert!(matches!(result, Err(WorksheetError::DuplicateNeighbor { .. })));

    let result = manabi_core::worksheet::reorder(conn, worksheet.id, Uuid::new_v4(), None, None).await;
    assert!(matches!(result, Err(WorksheetError::EntryNotFound { .. })));

    let result = manabi_core::worksheet::reorder(conn, worksheet.id, target, None, Some(Uuid::new_v4())).await;
    assert!(matches!(result, Err(WorksheetError::EntryNotFound { .. })));

    // Neighbors handed over in the wrong order violate the key order.
    let result = manabi_core::worksheet::reorder(
        conn,
        worksheet.id,
        target,
        Some(entries[3].problem_id),
        Some(entries[0].problem_id),
    )
    .await;
    assert!(matches!(
        result,
        Err(WorksheetError::Position(PositionError::InvertedBounds { .. }))
    ));
}

#[test(tokio::test)]
async fn test_rebalance_restores_unit_spacing() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();
    let problems = seeded_problems(conn).await;

    let (worksheet, entries) = manabi_core::worksheet::create_worksheet(conn, "drill", Uuid::new_v4(), &problems)
        .await
        .unwrap();

    // Shuffle one entry around the head a few times to fragment the keys.
    for _ in 0..3 {
        manabi_core::worksheet::reorder(
            conn,
            worksheet.id,
            entries[3].problem_id,
            None,
            Some(entries[0].problem_id),
        )
        .await
        .unwrap();
        manabi_core::worksheet::reorder(
            conn,
            worksheet.id,
            entries[3].problem_id,
            Some(entries[0].problem_id),
            Some(entries[1].problem_id),
        )
        .await
        .unwrap();
    }

    let order_before: Vec<Uuid> = manabi_db::worksheet::Query::get_entries(conn, worksheet.id)
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.problem_id)
        .collect();

    let rewritten = manabi_core::worksheet::rebalance(conn, worksheet.id).await.unwrap();
    assert!(rewritten > 0);

    let after = manabi_db::worksheet::Query::get_entries(conn, worksheet.id).await.unwrap();
    let order_after: Vec<Uuid> = after.iter().map(|entry| entry.problem_id).collect();
    assert_eq!(order_after, order_before);
    let positions: Vec<f64> = after.iter().map(|entry| entry.position).collect();
    assert_eq!(positions, vec![1.0, 2.0, 3.0, 4.0]);
}
