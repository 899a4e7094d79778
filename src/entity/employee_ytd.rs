use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Running year-to-date snapshot, one row per employee. Read before and
/// written after every payroll generation, inside the same transaction.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_ytd")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub figures: YtdFigures,
}

/// Every payroll money figure that accumulates across periods. One field
/// per figure; no dynamic field-name assembly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct YtdFigures {
    pub absent_deductions: Decimal,
    pub late_deductions: Decimal,
    pub undertime_deductions: Decimal,
    pub overtime_pay: Decimal,
    pub regular_holiday_pay: Decimal,
    pub special_holiday_pay: Decimal,
    pub leaves_pay: Decimal,
    pub total_allowances: Decimal,
    pub total_commissions: Decimal,
    pub total_other_compensations: Decimal,
    pub sss_contributions: Decimal,
    pub pagibig_contributions: Decimal,
    pub philhealth_contributions: Decimal,
    pub total_contributions: Decimal,
    pub gross_income: Decimal,
    pub taxable_income: Decimal,
    pub withheld_tax: Decimal,
    pub net_income: Decimal,
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
