use std::str::FromStr;

use actix_web::{dev, get, post, web, FromRequest, HttpRequest, HttpResponse, Responder};
use chrono::{Local, NaiveDate};
use futures_util::future::LocalBoxFuture;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::Admin,
    entity::{payroll, period, prelude::*, sea_orm_active_enums::{PeriodStatus, PeriodType}, user},
    pages::period::extractor::GeneratablePeriod,
    payroll::{generator::PayrollGenerator, PayrollError, PayrollOverrides},
};

use model::*;

mod extractor;
mod model;

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(create_period)
        .service(get_period)
        .service(generate_payroll)
        .service(get_payslip)
        .service(list_payrolls);
}

#[post("")]
async fn create_period(db: web::Data<DatabaseConnection>, admin: Admin, payload: web::Json<CreatePeriod>) -> impl Responder {
    if payload.end_date < payload.start_date {
        return Err(actix_web::error::ErrorBadRequest("end_date is lower than start_date"))
    }

    let settings = Settings::find()
        .one(db.as_ref()).await.unwrap()
        .ok_or(PayrollError::MissingSettings)?;

    let now = Local::now().fixed_offset();
    let period = period::ActiveModel {
        created_by: Set(Some(admin.id)),
        updated_by: Set(Some(admin.id)),
        created_at: Set(now),
        updated_at: Set(now),
        period_type: Set(payload.period_type.clone().unwrap_or(settings.period_cycle)),
        start_date: Set(payload.start_date),
        end_date: Set(payload.end_date),
        status: Set(PeriodStatus::Pending),
        ..Default::default()
    };

    let res = Period::insert(period)
        .exec_with_returning(db.as_ref()).await.unwrap();

    Ok(HttpResponse::Created().json(web::Json(res)))
}

#[get("/{period_id}")]
async fn get_period(period: period::Model) -> impl Responder {
    web::Json(period)
}

#[post("/{period_id}/payroll")]
async fn generate_payroll(
    db: web::Data<DatabaseConnection>,
    generator: web::Data<PayrollGenerator>,
    _admin: Admin,
    period: GeneratablePeriod,
    payload: web::Json<GeneratePayroll>,
) -> impl Responder {
    let Some(employee) = User::find_by_id(payload.employee_id)
        .one(db.as_ref()).await.unwrap()
    else {
        return Err(actix_web::error::ErrorNotFound("employee not found"))
    };

    let payroll = generator
        .generate(db.as_ref(), &period, &employee, &payload.overrides)
        .await?;

    Ok(HttpResponse::Ok().json(web::Json(payroll)))
}

#[get("/{period_id}/payroll")]
async fn get_payslip(db: web::Data<DatabaseConnection>, employee: user::Model, period: period::Model) -> impl Responder {
    let Some(payroll) = Payroll::find()
        .filter(payroll::Column::PeriodId.eq(period.id))
        .filter(payroll::Column::UserId.eq(employee.id))
        .one(db.as_ref()).await.unwrap()
    else {
        return Err(actix_web::error::ErrorNotFound("no payroll for this period"))
    };

    Ok(web::Json(payroll))
}

#[get("/{period_id}/payrolls")]
async fn list_payrolls(db: web::Data<DatabaseConnection>, _admin: Admin, period: period::Model) -> impl Responder {
    let payrolls = Payroll::find()
        .filter(payroll::Column::PeriodId.eq(period.id))
        .all(db.as_ref()).await.unwrap();

    web::Json(
        PeriodPayrolls {
            total_net_income: payrolls.iter().map(|payroll| payroll.net_income).sum(),
            payrolls,
        }
    )
}

#[cfg(test)]
mod tests {
    use actix_web::{http::{Method, StatusCode}, test, App};
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::{auth::Authority, entity::sea_orm_active_enums::RoleType};

    use super::*;

    fn admin() -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            created_at: Local::now().into(),
            updated_at: Local::now().into(),
            username: "admin".to_string(),
            password: Vec::new(),
            role: RoleType::Admin,
        }
    }

    fn pending_period() -> period::Model {
        period::Model {
            id: Uuid::new_v4(),
            created_at: Local::now().into(),
            updated_at: Local::now().into(),
            created_by: None,
            updated_by: None,
            period_type: PeriodType::SemiMonthly,
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            status: PeriodStatus::Pending,
        }
    }

    #[actix_web::test]
    async fn test_create_period_rejects_inverted_dates() {
        let secret = b"secret";
        let token = Authority::new(secret).issue_for(&admin());

        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(secret)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/periods").service(create_period))
        ).await;

        let req = test::TestRequest::default()
            .uri("/periods")
            .method(Method::POST)
            .insert_header(("Authorization", format!("JWT {token}")))
            .set_json(CreatePeriod {
                period_type: None,
                start_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            })
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_generate_payroll_for_an_unknown_employee() {
        let period = pending_period();

        let secret = b"secret";
        let token = Authority::new(secret).issue_for(&admin());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([ vec![ period.clone() ] ])
            .append_query_results([ Vec::<user::Model>::new() ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(secret)))
                .app_data(web::Data::new(db.into_connection()))
                .app_data(web::Data::new(PayrollGenerator::default()))
                .service(generate_payroll)
        ).await;

        let req = test::TestRequest::default()
            .uri(&format!("/{}/payroll", period.id))
            .method(Method::POST)
            .insert_header(("Authorization", format!("JWT {token}")))
            .set_json(GeneratePayroll {
                employee_id: Uuid::new_v4(),
                overrides: PayrollOverrides::default(),
            })
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
