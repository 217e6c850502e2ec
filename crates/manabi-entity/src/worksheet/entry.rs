use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "worksheet_problem")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub worksheet_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub problem_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub position: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::Entity",
        from = "Column::WorksheetId",
        to = "super::Column::Id"
    )]
    Worksheet,
    #[sea_orm(
        belongs_to = "crate::problem::Entity",
        from = "Column::ProblemId",
        to = "crate::problem::Column::Id"
    )]
    Problem,
}

impl Related<super::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worksheet.def()
    }
}

impl Related<crate::problem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Problem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
