use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "problem_type_enum")]
pub enum ProblemType {
    #[sea_orm(string_value = "selection")]
    Selection,
    #[sea_orm(string_value = "subjective")]
    Subjective,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "problem")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub unit_code: String,
    #[sea_orm(column_type = "Integer")]
    pub level: i32,
    pub problem_type: ProblemType,
    pub answer: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::worksheet::entry::Entity")]
    WorksheetEntry,
}

impl Related<super::worksheet::entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorksheetEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
