use manabi_entity::worksheet::{self, entry, entry::Entity as EntryEntity, Model as WorksheetModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_worksheet<C: ConnectionTrait>(
        conn: &C,
        name: &str,
        author_id: Uuid,
    ) -> Result<WorksheetModel, DbErr> {
        let worksheet = worksheet::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        };

        worksheet.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %name, "failed to create worksheet");
        })
    }

    /// Persists a freshly assembled set of entries for one worksheet.
    pub async fn insert_entries<C: ConnectionTrait>(
        conn: &C,
        worksheet_id: Uuid,
        entries: Vec<(Uuid, f64)>,
    ) -> Result<(), DbErr> {
        if entries.is_empty() {
            return Ok(());
        }

        let rows: Vec<entry::ActiveModel> = entries
            .into_iter()
            .map(|(problem_id, position)| entry::ActiveModel {
                worksheet_id: ActiveValue::Set(worksheet_id),
                problem_id: ActiveValue::Set(problem_id),
                position: ActiveValue::Set(position),
            })
            .collect();

        EntryEntity::insert_many(rows)
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %worksheet_id, "failed to insert worksheet entries");
            })?;
        Ok(())
    }

    /// Moves one entry, guarded by the position it was read at. Zero affected
    /// rows means a concurrent writer updated the entry in between.
    pub async fn shift_position<C: ConnectionTrait>(
        conn: &C,
        worksheet_id: Uuid,
        problem_id: Uuid,
        read_position: f64,
        new_position: f64,
    ) -> Result<u64, DbErr> {
        let update = entry::ActiveModel {
            worksheet_id: ActiveValue::NotSet,
            problem_id: ActiveValue::NotSet,
            position: ActiveValue::Set(new_position),
        };

        let res = EntryEntity::update_many()
            .set(update)
            .filter(entry::Column::WorksheetId.eq(worksheet_id))
            .filter(entry::Column::ProblemId.eq(problem_id))
            .filter(entry::Column::Position.eq(read_position))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %worksheet_id,
                    %problem_id,
                    "failed to shift worksheet entry"
                );
            })?;

        Ok(res.rows_affected)
    }

    /// Rewrites one entry's position unconditionally (rebalance pass).
    pub async fn set_position<C: ConnectionTrait>(
        conn: &C,
        worksheet_id: Uuid,
        problem_id: Uuid,
        position: f64,
    ) -> Result<(), DbErr> {
        let update = entry::ActiveModel {
            worksheet_id: ActiveValue::NotSet,
            problem_id: ActiveValue::NotSet,
            position: ActiveValue::Set(position),
        };

        let res = EntryEntity::update_many()
            .set(update)
            .filter(entry::Column::WorksheetId.eq(worksheet_id))
            .filter(entry::Column::ProblemId.eq(problem_id))
            .exec(conn)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("worksheet entry not found".to_string()));
        }

        Ok(())
    }
}
