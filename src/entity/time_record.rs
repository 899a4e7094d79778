use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One scheduled attendance day. Both actual clocks absent means a
/// full-day absence; expected clocks absent means the day cannot be
/// reconciled for late/undertime/overtime.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "time_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub user_id: Uuid,
    pub date: Date,
    pub expected_clock_in: Option<DateTimeWithTimeZone>,
    pub expected_clock_out: Option<DateTimeWithTimeZone>,
    pub clock_in: Option<DateTimeWithTimeZone>,
    pub clock_out: Option<DateTimeWithTimeZone>,
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
