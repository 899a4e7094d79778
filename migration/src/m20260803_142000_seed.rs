use sea_orm_migration::prelude::*;
use sha2::Digest as _;

use crate::m20260801_091500_init::{SalaryProfile, Settings, User};

const WORK_DAYS_PER_YEAR: f64 = 260.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const WORKING_HOURS_PER_DAY: f64 = 8.0;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let time = Expr::val("2026-08-03T14:20:00.000Z").cast_as("timestamptz");

        // Company-wide payroll settings (single row)
        manager
            .exec_stmt(Query::insert()
                .into_table(Settings::Table)
                .columns(["id", "created_at", "updated_at", "period_cycle", "grace_period_minutes", "minimum_overtime_minutes"])
                .values_panic([Expr::val(format!("{:032x}", 1 as u128)).cast_as("uuid"), time.clone(), time.clone(), Expr::val("semi-monthly").cast_as("period_type"), 10.into(), 30.into()])
                .to_owned()
        ).await.unwrap();

        // Creates 10 employees with a salary profile each
        for i in 1..=10 {
            let uuid = format!("{:032x}", (i + 100) as u128);
            let username = i.to_string();
            let basic_salary = rand::random_range(20_000..=80_000) as f64;
            let daily_rate = basic_salary * MONTHS_PER_YEAR / WORK_DAYS_PER_YEAR;
            let hourly_rate = daily_rate / WORKING_HOURS_PER_DAY;

            let hashed_password = &sha2::Sha256::digest(&format!("{}:{}", username, username))[..];

            manager
                .exec_stmt(Query::insert()
                    .into_table(User::Table)
                    .columns(["id", "created_at", "updated_at", "username", "password", "role"])
                    .values_panic([Expr::val(uuid.clone()).cast_as("uuid"), time.clone(), time.clone(), username.into(), hashed_password.into(), Expr::val("employee").cast_as("role_type")])
                    .to_owned()
            ).await.unwrap();

            manager
                .exec_stmt(Query::insert()
                    .into_table(SalaryProfile::Table)
                    .columns([
                        "id", "created_at", "updated_at", "user_id",
                        "basic_salary", "daily_rate", "hourly_rate", "working_hours_per_day",
                        "overtime_rate", "regular_holiday_rate", "special_holiday_rate",
                        "allowances", "commissions", "other_compensations",
                    ])
                    .values_panic([
                        Expr::val(format!("{:032x}", (i + 200) as u128)).cast_as("uuid"), time.clone(), time.clone(), Expr::val(uuid).cast_as("uuid"),
                        Expr::val(format!("{basic_salary:.2}")).cast_as("numeric"),
                        Expr::val(format!("{daily_rate:.2}")).cast_as("numeric"),
                        Expr::val(format!("{hourly_rate:.2}")).cast_as("numeric"),
                        8.into(),
                        Expr::val("1.25").cast_as("numeric"),
                        Expr::val("1.00").cast_as("numeric"),
                        Expr::val("0.30").cast_as("numeric"),
                        Expr::val(r#"[{"name": "transport", "pay": "2000"}]"#).cast_as("jsonb"),
                        Expr::val("[]").cast_as("jsonb"),
                        Expr::val("[]").cast_as("jsonb"),
                    ])
                    .to_owned()
            ).await.unwrap();
        }

        // Create an admin

        let hashed_password = &sha2::Sha256::digest("admin:admin")[..];

        manager
            .exec_stmt(Query::insert()
                .into_table(User::Table)
                .columns(["id", "created_at", "updated_at", "username", "password", "role"])
                .values_panic([Expr::val(format!("{:032x}", 12345 as u128)).cast_as("uuid"), time.clone(), time.clone(), "admin".into(), hashed_password.into(), Expr::val("admin").cast_as("role_type")])
                .to_owned()
        ).await.unwrap();

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for i in 1..=10 {
            manager
                .exec_stmt(Query::delete()
                    .from_table(SalaryProfile::Table)
                    .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", (i + 200) as u128)).cast_as("uuid")))
                    .to_owned()
            ).await.unwrap();

            manager
                .exec_stmt(Query::delete()
                    .from_table(User::Table)
                    .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", (i + 100) as u128)).cast_as("uuid")))
                    .to_owned()
            ).await.unwrap();
        }

        manager
            .exec_stmt(Query::delete()
                .from_table(User::Table)
                .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", 12345 as u128)).cast_as("uuid")))
                .to_owned()
        ).await.unwrap();

        manager
            .exec_stmt(Query::delete()
                .from_table(Settings::Table)
                .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", 1 as u128)).cast_as("uuid")))
                .to_owned()
        ).await.unwrap();

        Ok(())
    }
}
