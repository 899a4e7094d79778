use actix_web::{get, put, web, HttpResponse, Responder};
use chrono::Local;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{auth::Admin, entity::{prelude::*, salary_profile::{self, CompensationItem, CompensationItems}}};

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(upsert_salary_profile)
        .service(get_salary_profile);
}

const MONTHS_PER_YEAR: Decimal = dec!(12);
const WORK_DAYS_PER_YEAR: Decimal = dec!(260);

const DEFAULT_WORKING_HOURS_PER_DAY: i16 = 8;
const DEFAULT_OVERTIME_RATE: Decimal = dec!(1.25);
const DEFAULT_REGULAR_HOLIDAY_RATE: Decimal = dec!(1.00);
const DEFAULT_SPECIAL_HOLIDAY_RATE: Decimal = dec!(0.30);

#[derive(Debug, Serialize, Deserialize)]
struct SalaryProfileInput {
    basic_salary: Decimal,
    daily_rate: Option<Decimal>,
    hourly_rate: Option<Decimal>,
    working_hours_per_day: Option<i16>,
    overtime_rate: Option<Decimal>,
    regular_holiday_rate: Option<Decimal>,
    special_holiday_rate: Option<Decimal>,
    allowances: Option<Vec<CompensationItem>>,
    commissions: Option<Vec<CompensationItem>>,
    other_compensations: Option<Vec<CompensationItem>>,
}

/// Daily and hourly rates for a 5-day work week when the caller does not
/// supply them
fn derived_rates(basic_salary: Decimal, working_hours_per_day: i16) -> (Decimal, Decimal) {
    let daily_rate = (basic_salary * MONTHS_PER_YEAR / WORK_DAYS_PER_YEAR).round_dp(2);
    let hourly_rate = (daily_rate / Decimal::from(working_hours_per_day)).round_dp(2);

    (daily_rate, hourly_rate)
}

#[put("/{user_id}/salary")]
async fn upsert_salary_profile(db: web::Data<DatabaseConnection>, _admin: Admin, path: web::Path<Uuid>, payload: web::Json<SalaryProfileInput>) -> impl Responder {
    let user_id = path.into_inner();

    let Some(user) = User::find_by_id(user_id)
        .one(db.as_ref()).await.unwrap()
    else {
        return Err(actix_web::error::ErrorNotFound("employee not found"))
    };

    let payload = payload.into_inner();

    let working_hours_per_day = payload.working_hours_per_day.unwrap_or(DEFAULT_WORKING_HOURS_PER_DAY);
    let (derived_daily, derived_hourly) = derived_rates(payload.basic_salary, working_hours_per_day);

    let now = Local::now().fixed_offset();
    let fields = salary_profile::ActiveModel {
        updated_at: Set(now),
        basic_salary: Set(payload.basic_salary),
        daily_rate: Set(payload.daily_rate.unwrap_or(derived_daily)),
        hourly_rate: Set(payload.hourly_rate.unwrap_or(derived_hourly)),
        working_hours_per_day: Set(working_hours_per_day),
        overtime_rate: Set(payload.overtime_rate.unwrap_or(DEFAULT_OVERTIME_RATE)),
        regular_holiday_rate: Set(payload.regular_holiday_rate.unwrap_or(DEFAULT_REGULAR_HOLIDAY_RATE)),
        special_holiday_rate: Set(payload.special_holiday_rate.unwrap_or(DEFAULT_SPECIAL_HOLIDAY_RATE)),
        allowances: Set(CompensationItems(payload.allowances.unwrap_or_default())),
        commissions: Set(CompensationItems(payload.commissions.unwrap_or_default())),
        other_compensations: Set(CompensationItems(payload.other_compensations.unwrap_or_default())),
        ..Default::default()
    };

    let existing = SalaryProfile::find()
        .filter(salary_profile::Column::UserId.eq(user.id))
        .one(db.as_ref()).await.unwrap();

    match existing {
        Some(existing) => {
            let mut fields = fields;
            fields.id = Set(existing.id);

            let profile = SalaryProfile::update(fields)
                .exec(db.as_ref()).await.unwrap();

            Ok(HttpResponse::Ok().json(web::Json(profile)))
        }
        None => {
            let mut fields = fields;
            fields.user_id = Set(user.id);
            fields.created_at = Set(now);

            let profile = SalaryProfile::insert(fields)
                .exec_with_returning(db.as_ref()).await.unwrap();

            Ok(HttpResponse::Created().json(web::Json(profile)))
        }
    }
}

#[get("/{user_id}/salary")]
async fn get_salary_profile(db: web::Data<DatabaseConnection>, _admin: Admin, path: web::Path<Uuid>) -> impl Responder {
    let user_id = path.into_inner();

    let Some(profile) = SalaryProfile::find()
        .filter(salary_profile::Column::UserId.eq(user_id))
        .one(db.as_ref()).await.unwrap()
    else {
        return Err(actix_web::error::ErrorNotFound("salary profile not found"))
    };

    Ok(web::Json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_rates_for_a_five_day_week() {
        let (daily_rate, hourly_rate) = derived_rates(dec!(40_000), 8);

        assert_eq!(daily_rate, dec!(1846.15));
        assert_eq!(hourly_rate, dec!(230.77));
    }

    #[test]
    fn test_derived_rates_follow_working_hours() {
        let (daily_rate, hourly_rate) = derived_rates(dec!(40_000), 4);

        assert_eq!(daily_rate, dec!(1846.15));
        assert_eq!(hourly_rate, dec!(461.54));
    }
}
