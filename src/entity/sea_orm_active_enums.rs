use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role_type")]
#[serde(rename_all = "kebab-case")]
pub enum RoleType {
    #[sea_orm(string_value = "employee")]
    Employee,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "period_type")]
#[serde(rename_all = "kebab-case")]
pub enum PeriodType {
    #[sea_orm(string_value = "weekly")]
    Weekly,
    #[sea_orm(string_value = "semi-monthly")]
    SemiMonthly,
    #[sea_orm(string_value = "monthly")]
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "period_status")]
#[serde(rename_all = "kebab-case")]
pub enum PeriodStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "holiday_type")]
#[serde(rename_all = "kebab-case")]
pub enum HolidayType {
    #[sea_orm(string_value = "regular")]
    Regular,
    #[sea_orm(string_value = "special")]
    Special,
}
