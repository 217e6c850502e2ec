use manabi_entity::problem::{Model as ProblemModel, ProblemType};
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub async fn create_test_problem(
    db: &DatabaseConnection,
    unit_code: &str,
    level: i32,
    problem_type: ProblemType,
) -> ProblemModel {
    manabi_db::problem::Mutation::create_problem(db, unit_code, level, problem_type, "42")
        .await
        .unwrap()
}

/// Seeds one problem per listed level, all in the same unit.
#[allow(dead_code)]
pub async fn create_test_unit(db: &DatabaseConnection, unit_code: &str, levels: &[i32]) -> Vec<ProblemModel> {
    let mut problems = Vec::with_capacity(levels.len());
    for level in levels {
        problems.push(create_test_problem(db, unit_code, *level, ProblemType::Selection).await);
    }
    problems
}
