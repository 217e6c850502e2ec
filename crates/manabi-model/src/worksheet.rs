use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::position::PositionKey;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Worksheet {
    pub id: Uuid,
    pub name: String,
    pub author_id: Uuid,
    pub created_at: chrono::NaiveDateTime,
}

/// One problem's slot within a worksheet.
#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct WorksheetEntry {
    pub worksheet_id: Uuid,
    pub problem_id: Uuid,
    pub position: PositionKey,
}

/// Previous and updated key of a moved entry.
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PositionShift {
    pub previous: PositionKey,
    pub updated: PositionKey,
}
