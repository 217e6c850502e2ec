use manabi_entity::problem::{Model as ProblemModel, ProblemType};
use sea_orm::{ConnectionTrait, DbConn, DbErr};

pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    let migration = include_str!("sqlite.sql");
    db.execute_unprepared(migration).await?;
    Ok(())
}

#[allow(dead_code)]
pub async fn create_test_problem(db: &DbConn, unit_code: &str, level: i32) -> ProblemModel {
    manabi_db::problem::Mutation::create_problem(db, unit_code, level, ProblemType::Selection, "42")
        .await
        .unwrap()
}

/// Seeds `per_level` problems for every raw level 1..=5 in one unit.
#[allow(dead_code)]
pub async fn create_test_pool(db: &DbConn, unit_code: &str, per_level: usize) {
    for level in 1..=5 {
        for _ in 0..per_level {
            create_test_problem(db, unit_code, level).await;
        }
    }
}
