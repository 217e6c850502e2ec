use manabi_entity::problem::{self, Model as ProblemModel, ProblemType};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_problem<C: ConnectionTrait>(
        conn: &C,
        unit_code: &str,
        level: i32,
        problem_type: ProblemType,
        answer: &str,
    ) -> Result<ProblemModel, DbErr> {
        let problem = problem::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            unit_code: ActiveValue::Set(unit_code.to_string()),
            level: ActiveValue::Set(level),
            problem_type: ActiveValue::Set(problem_type),
            answer: ActiveValue::Set(answer.to_string()),
        };

        problem.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %unit_code, level, "failed to create problem");
        })
    }
}
