use manabi_entity::problem::{self, Entity as ProblemEntity, Model as ProblemModel, ProblemType};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::error::Error;

pub struct Query;

impl Query {
    /// Inventory size of one level set for the given unit filter.
    pub async fn count_by_levels<C: ConnectionTrait>(
        conn: &C,
        unit_codes: &[String],
        problem_type: Option<ProblemType>,
        levels: &[i32],
    ) -> Result<u64, DbErr> {
        let mut query = ProblemEntity::find()
            .filter(problem::Column::UnitCode.is_in(unit_codes.iter().cloned()))
            .filter(problem::Column::Level.is_in(levels.iter().copied()));
        if let Some(problem_type) = problem_type {
            query = query.filter(problem::Column::ProblemType.eq(problem_type));
        }

        query.count(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to count problems");
        })
    }

    /// Problems of one level set, at most `limit`, ordered by unit code and
    /// level so repeated searches see the same slice of the pool.
    pub async fn find_by_levels<C: ConnectionTrait>(
        conn: &C,
        unit_codes: &[String],
        problem_type: Option<ProblemType>,
        levels: &[i32],
        limit: u64,
    ) -> Result<Vec<ProblemModel>, DbErr> {
        let mut query = ProblemEntity::find()
            .filter(problem::Column::UnitCode.is_in(unit_codes.iter().cloned()))
            .filter(problem::Column::Level.is_in(levels.iter().copied()))
            .order_by_asc(problem::Column::UnitCode)
            .order_by_asc(problem::Column::Level)
            .limit(limit);
        if let Some(problem_type) = problem_type {
            query = query.filter(problem::Column::ProblemType.eq(problem_type));
        }

        query.all(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load problems by level");
        })
    }
}
