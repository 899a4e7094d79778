use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use super::salary_profile::CompensationItems;

/// The payroll artifact, uniquely keyed by `(period_id, user_id)`.
/// Regenerating for the same pair updates this row in place.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payroll")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub period_id: Uuid,
    pub user_id: Uuid,
    pub basic_salary: Decimal,
    pub absent_minutes: i64,
    pub absent_deductions: Decimal,
    pub absent_deductions_ytd: Decimal,
    pub late_minutes: i64,
    pub late_deductions: Decimal,
    pub late_deductions_ytd: Decimal,
    pub undertime_minutes: i64,
    pub undertime_deductions: Decimal,
    pub undertime_deductions_ytd: Decimal,
    pub overtime_minutes: i64,
    pub overtime_pay: Decimal,
    pub overtime_pay_ytd: Decimal,
    pub expected_hours_worked: Decimal,
    pub hours_worked: Decimal,
    pub regular_holiday_hours: Decimal,
    pub regular_holiday_hours_worked: Decimal,
    pub regular_holiday_pay: Decimal,
    pub regular_holiday_pay_ytd: Decimal,
    pub special_holiday_hours: Decimal,
    pub special_holiday_hours_worked: Decimal,
    pub special_holiday_pay: Decimal,
    pub special_holiday_pay_ytd: Decimal,
    pub leaves: LeaveItems,
    pub leaves_pay: Decimal,
    pub leaves_pay_ytd: Decimal,
    pub allowances: CompensationItems,
    pub total_allowances: Decimal,
    pub total_allowances_ytd: Decimal,
    pub commissions: CompensationItems,
    pub total_commissions: Decimal,
    pub total_commissions_ytd: Decimal,
    pub other_compensations: CompensationItems,
    pub total_other_compensations: Decimal,
    pub total_other_compensations_ytd: Decimal,
    pub sss_contributions: Decimal,
    pub sss_contributions_ytd: Decimal,
    pub pagibig_contributions: Decimal,
    pub pagibig_contributions_ytd: Decimal,
    pub philhealth_contributions: Decimal,
    pub philhealth_contributions_ytd: Decimal,
    pub total_contributions: Decimal,
    pub total_contributions_ytd: Decimal,
    pub gross_income: Decimal,
    pub gross_income_ytd: Decimal,
    pub taxable_income: Decimal,
    pub taxable_income_ytd: Decimal,
    pub withheld_tax: Decimal,
    pub withheld_tax_ytd: Decimal,
    pub net_income: Decimal,
    pub net_income_ytd: Decimal,
}

/// Paid leave ledger entries carried on the payroll row
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LeaveItems(pub Vec<LeaveItem>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveItem {
    pub date: Date,
    pub hours: Decimal,
    pub pay: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::period::Entity",
        from = "Column::PeriodId",
        to = "super::period::Column::Id"
    )]
    Period,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::period::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Period.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
