use actix_web::{body, http::{header::ContentType, StatusCode}, HttpResponse};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::{salary_profile::CompensationItem, sea_orm_active_enums::{PeriodStatus, PeriodType}};

pub mod attendance;
pub mod compensation;
pub mod contributions;
pub mod generator;
pub mod tax;
pub mod ytd;

pub const MINUTES_PER_HOUR: i64 = 60;

impl PeriodType {
    /// Factor used to pro-rate a monthly denominated amount to one period
    pub fn cycle_divisor(&self) -> Decimal {
        match self {
            PeriodType::Weekly => dec!(4),
            PeriodType::SemiMonthly => dec!(2),
            PeriodType::Monthly => Decimal::ONE,
        }
    }
}

/// Caller-supplied per-period inputs. A supplied compensation category
/// replaces the salary profile's recurring items verbatim; leave lines are
/// matched against time records by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollOverrides {
    pub leaves: Option<Vec<LeaveRequest>>,
    pub allowances: Option<Vec<CompensationItem>>,
    pub commissions: Option<Vec<CompensationItem>>,
    pub other_compensations: Option<Vec<CompensationItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub date: NaiveDate,
    pub hours: Decimal,
}

#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("employee `{0}` has no salary profile")]
    MissingSalaryProfile(String),
    #[error("no time records for employee `{0}` within the period")]
    NoTimeRecords(String),
    #[error("period is {0:?} and cannot be payrolled")]
    InvalidPeriodState(PeriodStatus),
    #[error("payroll settings are not configured")]
    MissingSettings,
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("database error")]
    Database(#[from] DbErr),
}

/// Failure raised by a statutory contribution or tax table collaborator,
/// surfaced verbatim to the caller
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} table has no bracket covering {amount}")]
    BracketNotFound {
        provider: &'static str,
        amount: Decimal,
    },
}

impl actix_web::error::ResponseError for PayrollError {
    fn error_response(&self) -> HttpResponse<body::BoxBody> {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PayrollError::MissingSalaryProfile(_)
            | PayrollError::NoTimeRecords(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PayrollError::InvalidPeriodState(_) => StatusCode::CONFLICT,
            PayrollError::MissingSettings
            | PayrollError::Provider(_)
            | PayrollError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
