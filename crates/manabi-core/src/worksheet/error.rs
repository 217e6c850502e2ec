use manabi_model::position::error::PositionError;
use manabi_model_tools::error::ConvertError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum WorksheetError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("a worksheet needs at least one problem")]
    EmptyWorksheet,

    #[error("a worksheet holds at most {max} problems, got {count}")]
    TooManyProblems { count: usize, max: usize },

    #[error("problem {problem_id} cannot neighbor itself")]
    SelfReferentialNeighbor { problem_id: Uuid },

    #[error("problem {problem_id} was given as both neighbors")]
    DuplicateNeighbor { problem_id: Uuid },

    #[error("problem {problem_id} is not part of worksheet {worksheet_id}")]
    EntryNotFound { worksheet_id: Uuid, problem_id: Uuid },

    #[error("entry {problem_id} of worksheet {worksheet_id} was moved concurrently")]
    PositionConflict { worksheet_id: Uuid, problem_id: Uuid },

    #[error(transparent)]
    Position(#[from] PositionError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}
