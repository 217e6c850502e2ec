use manabi_entity::problem::{Model as ProblemModel, ProblemType as ProblemTypeModel};
use manabi_model::difficulty::DifficultyTier;
use manabi_model::problem::{Problem, ProblemType};

use crate::convert::{FromDbModel, FromModel, TryFromDbModel};
use crate::error::ConvertError;

impl TryFromDbModel<ProblemModel> for Problem {
    type Error = ConvertError;

    fn try_from_db_model(model: ProblemModel) -> Result<Self, ConvertError> {
        if DifficultyTier::from_level(model.level).is_none() {
            return Err(ConvertError::UnknownLevel(model.level));
        }

        Ok(Self {
            id: model.id,
            unit_code: model.unit_code,
            level: model.level,
            problem_type: FromDbModel::from_db_model(model.problem_type),
            answer: model.answer,
        })
    }
}

impl FromDbModel<ProblemTypeModel> for ProblemType {
    fn from_db_model(model: ProblemTypeModel) -> Self {
        match model {
            ProblemTypeModel::Selection => ProblemType::Selection,
            ProblemTypeModel::Subjective => ProblemType::Subjective,
        }
    }
}

impl FromModel<ProblemType> for ProblemTypeModel {
    fn from_model(model: ProblemType) -> Self {
        match model {
            ProblemType::Selection => ProblemTypeModel::Selection,
            ProblemType::Subjective => ProblemTypeModel::Subjective,
        }
    }
}
