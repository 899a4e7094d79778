use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{PeriodStatus, PeriodType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "period")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub period_type: PeriodType,
    pub start_date: Date,
    pub end_date: Date,
    pub status: PeriodStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payroll::Entity")]
    Payroll,
}

impl Related<super::payroll::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payroll.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
