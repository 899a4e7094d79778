use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salary_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    /// Monthly denominated; pro-rated by the period's cycle divisor
    pub basic_salary: Decimal,
    pub daily_rate: Decimal,
    pub hourly_rate: Decimal,
    pub working_hours_per_day: i16,
    pub overtime_rate: Decimal,
    pub regular_holiday_rate: Decimal,
    pub special_holiday_rate: Decimal,
    pub allowances: CompensationItems,
    pub commissions: CompensationItems,
    pub other_compensations: CompensationItems,
}

/// Recurring or per-period compensation line items, stored as a JSON list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CompensationItems(pub Vec<CompensationItem>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationItem {
    pub name: String,
    pub pay: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
