use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::RoleType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(unique)]
    pub username: String,
    pub password: Vec<u8>,
    pub role: RoleType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::time_record::Entity")]
    TimeRecord,
    #[sea_orm(has_many = "super::payroll::Entity")]
    Payroll,
}

impl Related<super::time_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeRecord.def()
    }
}

impl Related<super::payroll::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payroll.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
