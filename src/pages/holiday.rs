use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::{Local, NaiveDate};
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{auth::Admin, entity::{holiday, prelude::*, sea_orm_active_enums::HolidayType, user}};

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(create_holiday)
        .service(list_holidays);
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateHoliday {
    name: String,
    date: NaiveDate,
    holiday_type: HolidayType,
}

#[derive(Debug, Serialize, Deserialize)]
struct HolidayQuery {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

#[post("")]
async fn create_holiday(db: web::Data<DatabaseConnection>, _admin: Admin, payload: web::Json<CreateHoliday>) -> impl Responder {
    let now = Local::now().fixed_offset();

    let holiday = holiday::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        name: Set(payload.name.clone()),
        date: Set(payload.date),
        holiday_type: Set(payload.holiday_type.clone()),
        ..Default::default()
    };

    let res = Holiday::insert(holiday)
        .exec_with_returning(db.as_ref()).await.unwrap();

    HttpResponse::Created().json(web::Json(res))
}

#[get("")]
async fn list_holidays(db: web::Data<DatabaseConnection>, _user: user::Model, query: web::Query<HolidayQuery>) -> impl Responder {
    let mut find = Holiday::find();

    if let Some(from) = query.from {
        find = find.filter(holiday::Column::Date.gte(from));
    }
    if let Some(to) = query.to {
        find = find.filter(holiday::Column::Date.lte(to));
    }

    let holidays = find
        .order_by_asc(holiday::Column::Date)
        .all(db.as_ref()).await.unwrap();

    web::Json(holidays)
}
