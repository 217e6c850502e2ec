use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::difficulty::DifficultyTier;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    Selection,
    Subjective,
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Problem {
    pub id: Uuid,
    pub unit_code: String,
    pub level: i32,
    pub problem_type: ProblemType,
    pub answer: String,
}

impl Problem {
    pub fn tier(&self) -> Option<DifficultyTier> {
        DifficultyTier::from_level(self.level)
    }
}
