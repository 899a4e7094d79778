use std::ops::Deref;

use super::*;

impl FromRequest for period::Model {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let period_id = req.match_info().get("period_id").expect("This extractor must be used under `period_id` path");
            let Ok(period_id) = Uuid::from_str(period_id) else {
                return Err(actix_web::error::ErrorBadRequest("invalid `period_id`"))
            };

            let db = req.app_data::<web::Data<DatabaseConnection>>().expect("DatabaseConnection must be attached");

            let Some(period) = Period::find_by_id(period_id)
                .one(db.as_ref()).await.unwrap()
            else {
                return Err(actix_web::error::ErrorNotFound(""))
            };

            Ok(period)
        })
    }
}

/// A period a payroll may still be generated for; cancelled periods are
/// rejected at the door
pub(super) struct GeneratablePeriod(pub(super) period::Model);

impl Deref for GeneratablePeriod {
    type Target = period::Model;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for GeneratablePeriod {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let period = period::Model::from_request(&req, &mut dev::Payload::None).await?;

            if period.status == PeriodStatus::Cancelled {
                return Err(PayrollError::InvalidPeriodState(period.status).into());
            }

            Ok(Self(period))
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    fn period(status: PeriodStatus) -> period::Model {
        period::Model {
            id: Uuid::new_v4(),
            created_at: Local::now().into(),
            updated_at: Local::now().into(),
            created_by: None,
            updated_by: None,
            period_type: PeriodType::SemiMonthly,
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            status,
        }
    }

    #[actix_web::test]
    async fn test_period_extractor() {
        #[get("/{period_id}")]
        async fn test_handler(period: period::Model) -> impl Responder {
            web::Json(period)
        }

        let period = period(PeriodStatus::Pending);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ period.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.into_connection()))
                .service(test_handler)
        ).await;

        let req = test::TestRequest::default()
            .uri(&format!("/{}", period.id))
            .to_request();

        let returned_period: period::Model = test::call_and_read_body_json(&app, req).await;
        assert_eq!(returned_period, period);
    }

    #[actix_web::test]
    async fn test_generatable_period_extractor() {
        #[get("/{period_id}")]
        async fn test_handler(period: GeneratablePeriod) -> impl Responder {
            web::Json(period.0)
        }

        let pending = period(PeriodStatus::Pending);
        let completed = period(PeriodStatus::Completed);
        let cancelled = period(PeriodStatus::Cancelled);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ pending.clone() ],
                vec![ completed.clone() ],
                vec![ cancelled.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.into_connection()))
                .service(test_handler)
        ).await;

        let req = test::TestRequest::default()
            .uri(&format!("/{}", pending.id))
            .to_request();

        let returned_period: period::Model = test::call_and_read_body_json(&app, req).await;
        assert_eq!(returned_period, pending);

        // A completed period may be regenerated
        let req = test::TestRequest::default()
            .uri(&format!("/{}", completed.id))
            .to_request();

        let returned_period: period::Model = test::call_and_read_body_json(&app, req).await;
        assert_eq!(returned_period, completed);

        let req = test::TestRequest::default()
            .uri(&format!("/{}", cancelled.id))
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
