use manabi_entity::worksheet::{entry::Model as EntryModel, Model as WorksheetModel};
use manabi_model::position::PositionKey;
use manabi_model::worksheet::{Worksheet, WorksheetEntry};

use crate::convert::{FromDbModel, TryFromDbModel};
use crate::error::ConvertError;

impl FromDbModel<WorksheetModel> for Worksheet {
    fn from_db_model(model: WorksheetModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            author_id: model.author_id,
            created_at: model.created_at,
        }
    }
}

impl TryFromDbModel<EntryModel> for WorksheetEntry {
    type Error = ConvertError;

    fn try_from_db_model(model: EntryModel) -> Result<Self, ConvertError> {
        Ok(Self {
            worksheet_id: model.worksheet_id,
            problem_id: model.problem_id,
            position: PositionKey::new(model.position)?,
        })
    }
}
