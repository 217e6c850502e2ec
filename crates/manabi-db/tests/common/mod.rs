pub mod problems;

use sea_orm::{ConnectionTrait, DbConn, DbErr};

pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    let migration = include_str!("sqlite.sql");
    db.execute_unprepared(migration).await?;
    Ok(())
}
