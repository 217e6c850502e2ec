use manabi_entity::worksheet::entry::{self, Entity as EntryEntity, Model as EntryModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_entry<C: ConnectionTrait>(
        conn: &C,
        worksheet_id: Uuid,
        problem_id: Uuid,
    ) -> Result<Option<EntryModel>, DbErr> {
        EntryEntity::find_by_id((worksheet_id, problem_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    %worksheet_id,
                    %problem_id,
                    "failed to load worksheet entry"
                );
            })
    }

    /// All entries of one worksheet in sequence order.
    pub async fn get_entries<C: ConnectionTrait>(conn: &C, worksheet_id: Uuid) -> Result<Vec<EntryModel>, DbErr> {
        EntryEntity::find()
            .filter(entry::Column::WorksheetId.eq(worksheet_id))
            .order_by_asc(entry::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %worksheet_id, "failed to load worksheet entries");
            })
    }
}
