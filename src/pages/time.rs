use actix_web::{post, web, HttpResponse, Responder};
use chrono::{Local, NaiveDate, NaiveTime, TimeZone as _};
use sea_orm::{ActiveValue::{Set, Unchanged}, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{auth::Admin, entity::{prelude::*, time_record, user}, utils};

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(clock)
        .service(create_schedule);
}

/// Stamps the employee's scheduled record for today: clock-in first,
/// clock-out on the second punch
#[post("/clock")]
async fn clock(db: web::Data<DatabaseConnection>, employee: user::Model) -> impl Responder {
    let now = Local::now().fixed_offset();

    let Some(record) = TimeRecord::find()
        .filter(time_record::Column::UserId.eq(employee.id))
        .filter(time_record::Column::Date.eq(now.date_naive()))
        .one(db.as_ref()).await.unwrap()
    else {
        return Err(actix_web::error::ErrorBadRequest("no scheduled time record for today"))
    };

    let mut model = time_record::ActiveModel {
        id: Unchanged(record.id),
        updated_at: Set(now),
        ..Default::default()
    };

    if record.clock_in.is_none() {
        model.clock_in = Set(Some(now));
    } else if record.clock_out.is_none() {
        model.clock_out = Set(Some(now));
    } else {
        return Err(actix_web::error::ErrorBadRequest("already clocked out for today"));
    }

    let record = TimeRecord::update(model)
        .exec(db.as_ref()).await.unwrap();

    Ok(web::Json(record))
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateSchedule {
    user_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    expected_clock_in: NaiveTime,
    expected_clock_out: NaiveTime,
}

/// Provisions one expected attendance record per weekday in the range
#[post("/schedule")]
async fn create_schedule(db: web::Data<DatabaseConnection>, _admin: Admin, payload: web::Json<CreateSchedule>) -> impl Responder {
    if payload.end_date < payload.start_date {
        return Err(actix_web::error::ErrorBadRequest("end_date is lower than start_date"))
    }

    let Some(user) = User::find_by_id(payload.user_id)
        .one(db.as_ref()).await.unwrap()
    else {
        return Err(actix_web::error::ErrorNotFound("employee not found"))
    };

    let now = Local::now().fixed_offset();
    let at = |date: NaiveDate, time: NaiveTime| {
        Local.from_local_datetime(&date.and_time(time)).single().unwrap().fixed_offset()
    };

    let mut records = Vec::new();
    for date in utils::working_days(payload.start_date, payload.end_date) {
        let record = time_record::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            user_id: Set(user.id),
            date: Set(date),
            expected_clock_in: Set(Some(at(date, payload.expected_clock_in))),
            expected_clock_out: Set(Some(at(date, payload.expected_clock_out))),
            ..Default::default()
        };

        records.push(TimeRecord::insert(record)
            .exec_with_returning(db.as_ref()).await.unwrap());
    }

    Ok(HttpResponse::Created().json(web::Json(records)))
}
