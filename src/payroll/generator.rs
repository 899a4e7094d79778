use chrono::Local;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue::{Set, Unchanged}, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::{error, info};

use crate::{
    entity::{
        employee_ytd::{self, YtdFigures},
        holiday,
        payroll::{self, LeaveItems},
        period,
        prelude::*,
        salary_profile::{self, CompensationItems},
        sea_orm_active_enums::PeriodStatus,
        settings, time_record, user,
    },
    payroll::{
        attendance::{self, AttendanceSummary, ReconcilerConfig},
        compensation::{self, CompensationBreakdown},
        contributions::{self, ContributionBreakdown, ContributionProvider, PagIbig, PhilHealth, Sss},
        tax::{TaxProvider, WithholdingTaxTable},
        PayrollError, PayrollOverrides, ProviderError,
    },
};

/// Drives one payroll generation end to end: validate, compute, persist.
/// Holds the statutory contribution and withholding tax collaborators.
pub struct PayrollGenerator {
    sss: Box<dyn ContributionProvider>,
    pagibig: Box<dyn ContributionProvider>,
    philhealth: Box<dyn ContributionProvider>,
    tax: Box<dyn TaxProvider>,
}

impl Default for PayrollGenerator {
    fn default() -> Self {
        Self::new(
            Box::new(Sss),
            Box::new(PagIbig),
            Box::new(PhilHealth),
            Box::new(WithholdingTaxTable),
        )
    }
}

/// Everything one generation computed, before it is persisted
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollComputation {
    pub basic_salary: Decimal,
    pub attendance: AttendanceSummary,
    pub allowances: CompensationBreakdown,
    pub commissions: CompensationBreakdown,
    pub other_compensations: CompensationBreakdown,
    pub contributions: ContributionBreakdown,
    pub gross_income: Decimal,
    pub taxable_income: Decimal,
    pub withheld_tax: Decimal,
    pub net_income: Decimal,
    /// This period's figures, in snapshot shape
    pub current: YtdFigures,
    /// The updated snapshot: base plus `current`
    pub ytd: YtdFigures,
}

impl PayrollGenerator {
    pub fn new(
        sss: Box<dyn ContributionProvider>,
        pagibig: Box<dyn ContributionProvider>,
        philhealth: Box<dyn ContributionProvider>,
        tax: Box<dyn TaxProvider>,
    ) -> Self {
        Self { sss, pagibig, philhealth, tax }
    }

    /// The pure computation pipeline: attendance, compensations,
    /// contributions, tax, YTD fold. No I/O.
    pub fn compute(
        &self,
        period: &period::Model,
        profile: &salary_profile::Model,
        settings: &settings::Model,
        records: &[time_record::Model],
        holidays: &[holiday::Model],
        overrides: &PayrollOverrides,
        ytd_base: &YtdFigures,
    ) -> Result<PayrollComputation, ProviderError> {
        let divisor = period.period_type.cycle_divisor();
        let basic_salary = (profile.basic_salary / divisor).round_dp(2);

        let attendance = attendance::reconcile(
            records,
            holidays,
            overrides.leaves.as_deref().unwrap_or(&[]),
            &ReconcilerConfig {
                grace_period_minutes: settings.grace_period_minutes.into(),
                minimum_overtime_minutes: settings.minimum_overtime_minutes.into(),
                working_hours_per_day: profile.working_hours_per_day.into(),
                hourly_rate: profile.hourly_rate,
                regular_holiday_rate: profile.regular_holiday_rate,
                special_holiday_rate: profile.special_holiday_rate,
            },
        );

        let allowances = compensation::assemble(&profile.allowances.0, overrides.allowances.as_deref(), divisor);
        let commissions = compensation::assemble(&profile.commissions.0, overrides.commissions.as_deref(), divisor);
        let other_compensations = compensation::assemble(&profile.other_compensations.0, overrides.other_compensations.as_deref(), divisor);

        let contributions = contributions::compute_contributions(
            self.sss.as_ref(),
            self.pagibig.as_ref(),
            self.philhealth.as_ref(),
            basic_salary,
        )?;

        let gross_income = basic_salary
            - attendance.absent_deductions
            - attendance.undertime_deductions
            - attendance.late_deductions
            + attendance.overtime_pay;

        let taxable_income = gross_income
            + attendance.leaves_pay
            + allowances.total
            + commissions.total
            - contributions.total;

        let withheld_tax = self.tax.compute(taxable_income, &period.period_type)?;

        let net_income = taxable_income - withheld_tax + other_compensations.total;

        let current = YtdFigures {
            absent_deductions: attendance.absent_deductions,
            late_deductions: attendance.late_deductions,
            undertime_deductions: attendance.undertime_deductions,
            overtime_pay: attendance.overtime_pay,
            regular_holiday_pay: attendance.regular_holiday.pay,
            special_holiday_pay: attendance.special_holiday.pay,
            leaves_pay: attendance.leaves_pay,
            total_allowances: allowances.total,
            total_commissions: commissions.total,
            total_other_compensations: other_compensations.total,
            sss_contributions: contributions.sss,
            pagibig_contributions: contributions.pagibig,
            philhealth_contributions: contributions.philhealth,
            total_contributions: contributions.total,
            gross_income,
            taxable_income,
            withheld_tax,
            net_income,
        };
        let ytd = ytd_base.accumulate(&current);

        Ok(PayrollComputation {
            basic_salary,
            attendance,
            allowances,
            commissions,
            other_compensations,
            contributions,
            gross_income,
            taxable_income,
            withheld_tax,
            net_income,
            current,
            ytd,
        })
    }

    /// Generates the payroll for one `(period, employee)` pair.
    ///
    /// Update-or-create: an existing payroll row for the pair is rewritten
    /// in place, with its previous figures rolled back out of the YTD base
    /// first. The payroll and snapshot writes share one transaction.
    pub async fn generate(
        &self,
        db: &DatabaseConnection,
        period: &period::Model,
        employee: &user::Model,
        overrides: &PayrollOverrides,
    ) -> Result<payroll::Model, PayrollError> {
        if period.status == PeriodStatus::Cancelled {
            return Err(PayrollError::InvalidPeriodState(period.status.clone()));
        }

        let settings = Settings::find()
            .one(db).await?
            .ok_or(PayrollError::MissingSettings)?;

        let profile = SalaryProfile::find()
            .filter(salary_profile::Column::UserId.eq(employee.id))
            .one(db).await?
            .ok_or_else(|| PayrollError::MissingSalaryProfile(employee.username.clone()))?;

        let records = TimeRecord::find()
            .filter(time_record::Column::UserId.eq(employee.id))
            .filter(time_record::Column::Date.between(period.start_date, period.end_date))
            .order_by_asc(time_record::Column::Date)
            .all(db).await?;

        if records.is_empty() {
            return Err(PayrollError::NoTimeRecords(employee.username.clone()));
        }

        let holidays = Holiday::find()
            .filter(holiday::Column::Date.between(period.start_date, period.end_date))
            .all(db).await?;

        let snapshot = EmployeeYtd::find()
            .filter(employee_ytd::Column::UserId.eq(employee.id))
            .one(db).await?;

        let existing = Payroll::find()
            .filter(payroll::Column::PeriodId.eq(period.id))
            .filter(payroll::Column::UserId.eq(employee.id))
            .one(db).await?;

        let mut ytd_base = snapshot.as_ref()
            .map(|snapshot| snapshot.figures.clone())
            .unwrap_or_default();
        if let Some(existing) = &existing {
            ytd_base = ytd_base.rollback(&YtdFigures::of_payroll(existing));
        }

        let computed = self.compute(period, &profile, &settings, &records, &holidays, overrides, &ytd_base)
            .map_err(|err| {
                error!(employee = %employee.username, period = %period.id, error = %err, "payroll computation failed");
                err
            })?;

        let now = Local::now().fixed_offset();
        let txn = db.begin().await?;

        let saved = match existing {
            Some(existing) => {
                let mut model: payroll::ActiveModel = existing.into();
                apply_figures(&mut model, &computed);
                model.updated_at = Set(now);

                Payroll::update(model).exec(&txn).await?
            }
            None => {
                let mut model = payroll::ActiveModel {
                    period_id: Set(period.id),
                    user_id: Set(employee.id),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                apply_figures(&mut model, &computed);

                Payroll::insert(model).exec_with_returning(&txn).await?
            }
        };

        match snapshot {
            Some(snapshot) => {
                let mut model: employee_ytd::ActiveModel = snapshot.into();
                model.figures = Set(computed.ytd.clone());
                model.updated_at = Set(now);

                EmployeeYtd::update(model).exec(&txn).await?;
            }
            None => {
                EmployeeYtd::insert(employee_ytd::ActiveModel {
                    user_id: Set(employee.id),
                    figures: Set(computed.ytd.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }).exec_with_returning(&txn).await?;
            }
        }

        txn.commit().await?;

        if period.status == PeriodStatus::Pending {
            Period::update(period::ActiveModel {
                id: Unchanged(period.id),
                status: Set(PeriodStatus::Completed),
                updated_at: Set(now),
                ..Default::default()
            }).exec(db).await?;
        }

        info!(employee = %employee.username, period = %period.id, net_income = %saved.net_income, "generated payroll");

        Ok(saved)
    }
}

fn apply_figures(model: &mut payroll::ActiveModel, computed: &PayrollComputation) {
    model.basic_salary = Set(computed.basic_salary);

    model.absent_minutes = Set(computed.attendance.absent_minutes);
    model.absent_deductions = Set(computed.attendance.absent_deductions);
    model.absent_deductions_ytd = Set(computed.ytd.absent_deductions);
    model.late_minutes = Set(computed.attendance.late_minutes);
    model.late_deductions = Set(computed.attendance.late_deductions);
    model.late_deductions_ytd = Set(computed.ytd.late_deductions);
    model.undertime_minutes = Set(computed.attendance.undertime_minutes);
    model.undertime_deductions = Set(computed.attendance.undertime_deductions);
    model.undertime_deductions_ytd = Set(computed.ytd.undertime_deductions);
    model.overtime_minutes = Set(computed.attendance.overtime_minutes);
    model.overtime_pay = Set(computed.attendance.overtime_pay);
    model.overtime_pay_ytd = Set(computed.ytd.overtime_pay);

    model.expected_hours_worked = Set(computed.attendance.expected_hours_worked);
    model.hours_worked = Set(computed.attendance.hours_worked);

    model.regular_holiday_hours = Set(computed.attendance.regular_holiday.hours);
    model.regular_holiday_hours_worked = Set(computed.attendance.regular_holiday.hours_worked);
    model.regular_holiday_pay = Set(computed.attendance.regular_holiday.pay);
    model.regular_holiday_pay_ytd = Set(computed.ytd.regular_holiday_pay);
    model.special_holiday_hours = Set(computed.attendance.special_holiday.hours);
    model.special_holiday_hours_worked = Set(computed.attendance.special_holiday.hours_worked);
    model.special_holiday_pay = Set(computed.attendance.special_holiday.pay);
    model.special_holiday_pay_ytd = Set(computed.ytd.special_holiday_pay);

    model.leaves = Set(LeaveItems(computed.attendance.leaves.clone()));
    model.leaves_pay = Set(computed.attendance.leaves_pay);
    model.leaves_pay_ytd = Set(computed.ytd.leaves_pay);

    model.allowances = Set(CompensationItems(computed.allowances.items.clone()));
    model.total_allowances = Set(computed.allowances.total);
    model.total_allowances_ytd = Set(computed.ytd.total_allowances);
    model.commissions = Set(CompensationItems(computed.commissions.items.clone()));
    model.total_commissions = Set(computed.commissions.total);
    model.total_commissions_ytd = Set(computed.ytd.total_commissions);
    model.other_compensations = Set(CompensationItems(computed.other_compensations.items.clone()));
    model.total_other_compensations = Set(computed.other_compensations.total);
    model.total_other_compensations_ytd = Set(computed.ytd.total_other_compensations);

    model.sss_contributions = Set(computed.contributions.sss);
    model.sss_contributions_ytd = Set(computed.ytd.sss_contributions);
    model.pagibig_contributions = Set(computed.contributions.pagibig);
    model.pagibig_contributions_ytd = Set(computed.ytd.pagibig_contributions);
    model.philhealth_contributions = Set(computed.contributions.philhealth);
    model.philhealth_contributions_ytd = Set(computed.ytd.philhealth_contributions);
    model.total_contributions = Set(computed.contributions.total);
    model.total_contributions_ytd = Set(computed.ytd.total_contributions);

    model.gross_income = Set(computed.gross_income);
    model.gross_income_ytd = Set(computed.ytd.gross_income);
    model.taxable_income = Set(computed.taxable_income);
    model.taxable_income_ytd = Set(computed.ytd.taxable_income);
    model.withheld_tax = Set(computed.withheld_tax);
    model.withheld_tax_ytd = Set(computed.ytd.withheld_tax);
    model.net_income = Set(computed.net_income);
    model.net_income_ytd = Set(computed.ytd.net_income);
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone as _, Utc};
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use crate::entity::{salary_profile::{CompensationItem, CompensationItems}, sea_orm_active_enums::{PeriodType, RoleType}};

    use super::*;

    struct FixedContribution(Decimal);

    impl ContributionProvider for FixedContribution {
        fn compute(&self, _: Decimal) -> Result<Decimal, ProviderError> {
            Ok(self.0)
        }
    }

    struct NoTax;

    impl TaxProvider for NoTax {
        fn compute(&self, _: Decimal, _: &PeriodType) -> Result<Decimal, ProviderError> {
            Ok(Decimal::ZERO)
        }
    }

    fn timestamp(day: u32, hour: u32, minute: u32) -> sea_orm::prelude::DateTimeWithTimeZone {
        Utc.with_ymd_and_hms(2026, 6, day, hour, minute, 0).unwrap().fixed_offset()
    }

    fn employee() -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            created_at: timestamp(1, 0, 0),
            updated_at: timestamp(1, 0, 0),
            username: "Bob".to_string(),
            password: Vec::new(),
            role: RoleType::Employee,
        }
    }

    fn period(status: PeriodStatus) -> period::Model {
        period::Model {
            id: Uuid::new_v4(),
            created_at: timestamp(1, 0, 0),
            updated_at: timestamp(1, 0, 0),
            created_by: None,
            updated_by: None,
            period_type: PeriodType::SemiMonthly,
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            status,
        }
    }

    fn settings() -> settings::Model {
        settings::Model {
            id: Uuid::new_v4(),
            created_at: timestamp(1, 0, 0),
            updated_at: timestamp(1, 0, 0),
            period_cycle: PeriodType::SemiMonthly,
            grace_period_minutes: 10,
            minimum_overtime_minutes: 30,
        }
    }

    fn profile(user_id: Uuid) -> salary_profile::Model {
        salary_profile::Model {
            id: Uuid::new_v4(),
            created_at: timestamp(1, 0, 0),
            updated_at: timestamp(1, 0, 0),
            user_id,
            basic_salary: dec!(40_000),
            daily_rate: dec!(1846.15),
            hourly_rate: dec!(230.77),
            working_hours_per_day: 8,
            overtime_rate: dec!(1.25),
            regular_holiday_rate: dec!(1.0),
            special_holiday_rate: dec!(0.3),
            allowances: CompensationItems(vec![CompensationItem { name: "transport".to_string(), pay: dec!(2_000) }]),
            commissions: CompensationItems(Vec::new()),
            other_compensations: CompensationItems(vec![CompensationItem { name: "13th month accrual".to_string(), pay: dec!(1_000) }]),
        }
    }

    fn on_time_record(user_id: Uuid, day: u32) -> time_record::Model {
        time_record::Model {
            id: Uuid::new_v4(),
            created_at: timestamp(day, 0, 0),
            updated_at: timestamp(day, 0, 0),
            user_id,
            date: NaiveDate::from_ymd_opt(2026, 6, day).unwrap(),
            expected_clock_in: Some(timestamp(day, 8, 0)),
            expected_clock_out: Some(timestamp(day, 17, 0)),
            clock_in: Some(timestamp(day, 8, 0)),
            clock_out: Some(timestamp(day, 17, 0)),
        }
    }

    #[test]
    fn test_clean_attendance_grosses_the_basic_salary() {
        let employee = employee();
        let records = [on_time_record(employee.id, 1), on_time_record(employee.id, 2)];

        let computed = PayrollGenerator::default()
            .compute(&period(PeriodStatus::Pending), &profile(employee.id), &settings(), &records, &[], &PayrollOverrides::default(), &YtdFigures::default())
            .unwrap();

        assert_eq!(computed.basic_salary, dec!(20_000));
        assert_eq!(computed.gross_income, computed.basic_salary);
        // Semi-monthly pro-rating halves the 2,000 recurring allowance
        assert_eq!(computed.allowances.total, dec!(1_000));
    }

    #[test]
    fn test_income_identities_hold() {
        let employee = employee();
        let mut late = on_time_record(employee.id, 1);
        late.clock_in = Some(timestamp(1, 8, 45));
        let records = [late, on_time_record(employee.id, 2), on_time_record(employee.id, 3)];
        let overrides = PayrollOverrides {
            leaves: Some(vec![crate::payroll::LeaveRequest {
                date: NaiveDate::from_ymd_opt(2026, 6, 2).unwrap(),
                hours: dec!(4),
            }]),
            ..Default::default()
        };

        let computed = PayrollGenerator::default()
            .compute(&period(PeriodStatus::Pending), &profile(employee.id), &settings(), &records, &[], &overrides, &YtdFigures::default())
            .unwrap();

        assert_eq!(computed.attendance.late_minutes, 35);
        assert_eq!(
            computed.gross_income,
            computed.basic_salary
                - computed.attendance.absent_deductions
                - computed.attendance.undertime_deductions
                - computed.attendance.late_deductions
                + computed.attendance.overtime_pay,
        );
        assert_eq!(
            computed.taxable_income,
            computed.gross_income
                + computed.attendance.leaves_pay
                + computed.allowances.total
                + computed.commissions.total
                - computed.contributions.total,
        );
        assert_eq!(
            computed.net_income,
            computed.taxable_income - computed.withheld_tax + computed.other_compensations.total,
        );
    }

    #[test]
    fn test_withheld_tax_is_the_period_figure_only() {
        let employee = employee();
        let records = [on_time_record(employee.id, 1)];
        let ytd_base = YtdFigures { withheld_tax: dec!(5_000), ..Default::default() };

        let computed = PayrollGenerator::default()
            .compute(&period(PeriodStatus::Pending), &profile(employee.id), &settings(), &records, &[], &PayrollOverrides::default(), &ytd_base)
            .unwrap();

        // The YTD rollup must not leak back into the period figure
        assert_eq!(computed.ytd.withheld_tax, ytd_base.withheld_tax + computed.withheld_tax);
        assert_eq!(
            computed.net_income,
            computed.taxable_income - computed.withheld_tax + computed.other_compensations.total,
        );
    }

    #[test]
    fn test_fixed_providers_sum_into_total_contributions() {
        let generator = PayrollGenerator::new(
            Box::new(FixedContribution(dec!(800))),
            Box::new(FixedContribution(dec!(100))),
            Box::new(FixedContribution(dec!(200))),
            Box::new(NoTax),
        );
        let employee = employee();
        let records = [on_time_record(employee.id, 1)];

        let computed = generator
            .compute(&period(PeriodStatus::Pending), &profile(employee.id), &settings(), &records, &[], &PayrollOverrides::default(), &YtdFigures::default())
            .unwrap();

        assert_eq!(computed.contributions.total, dec!(1_100));
        assert_eq!(computed.withheld_tax, dec!(0));
    }

    #[test]
    fn test_compensation_overrides_replace_recurring_items() {
        let employee = employee();
        let records = [on_time_record(employee.id, 1)];
        let overrides = PayrollOverrides {
            allowances: Some(vec![CompensationItem { name: "per diem".to_string(), pay: dec!(750) }]),
            ..Default::default()
        };

        let computed = PayrollGenerator::default()
            .compute(&period(PeriodStatus::Pending), &profile(employee.id), &settings(), &records, &[], &overrides, &YtdFigures::default())
            .unwrap();

        assert_eq!(computed.allowances.items.len(), 1);
        assert_eq!(computed.allowances.items[0].name, "per diem");
        // Overrides are period amounts already, never pro-rated
        assert_eq!(computed.allowances.total, dec!(750));
    }

    #[test]
    fn test_ytd_fold_adds_onto_the_base() {
        let employee = employee();
        let records = [on_time_record(employee.id, 1)];
        let ytd_base = YtdFigures {
            gross_income: dec!(100_000),
            net_income: dec!(90_000),
            total_contributions: dec!(7_500),
            ..Default::default()
        };

        let computed = PayrollGenerator::default()
            .compute(&period(PeriodStatus::Pending), &profile(employee.id), &settings(), &records, &[], &PayrollOverrides::default(), &ytd_base)
            .unwrap();

        assert_eq!(computed.ytd, ytd_base.accumulate(&computed.current));
        assert_eq!(computed.ytd.gross_income, dec!(100_000) + computed.gross_income);
    }

    #[actix_web::test]
    async fn test_generate_rejects_a_cancelled_period() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = PayrollGenerator::default()
            .generate(&db, &period(PeriodStatus::Cancelled), &employee(), &PayrollOverrides::default())
            .await;

        assert!(matches!(result, Err(PayrollError::InvalidPeriodState(PeriodStatus::Cancelled))));
    }

    #[actix_web::test]
    async fn test_generate_requires_settings() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<settings::Model>::new()])
            .into_connection();

        let result = PayrollGenerator::default()
            .generate(&db, &period(PeriodStatus::Pending), &employee(), &PayrollOverrides::default())
            .await;

        assert!(matches!(result, Err(PayrollError::MissingSettings)));
    }

    #[actix_web::test]
    async fn test_generate_requires_a_salary_profile() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![settings()]])
            .append_query_results([Vec::<salary_profile::Model>::new()])
            .into_connection();

        let result = PayrollGenerator::default()
            .generate(&db, &period(PeriodStatus::Pending), &employee(), &PayrollOverrides::default())
            .await;

        assert!(matches!(result, Err(PayrollError::MissingSalaryProfile(username)) if username == "Bob"));
    }

    #[actix_web::test]
    async fn test_generate_requires_time_records() {
        let employee = employee();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![settings()]])
            .append_query_results([vec![profile(employee.id)]])
            .append_query_results([Vec::<time_record::Model>::new()])
            .into_connection();

        let result = PayrollGenerator::default()
            .generate(&db, &period(PeriodStatus::Pending), &employee, &PayrollOverrides::default())
            .await;

        assert!(matches!(result, Err(PayrollError::NoTimeRecords(_))));
    }

    #[actix_web::test]
    async fn test_generate_persists_and_completes_the_period() {
        let employee = employee();
        let period = period(PeriodStatus::Pending);

        let saved = payroll::Model {
            id: Uuid::new_v4(),
            created_at: timestamp(16, 0, 0),
            updated_at: timestamp(16, 0, 0),
            period_id: period.id,
            user_id: employee.id,
            basic_salary: dec!(20_000),
            absent_minutes: 0,
            absent_deductions: dec!(0),
            absent_deductions_ytd: dec!(0),
            late_minutes: 0,
            late_deductions: dec!(0),
            late_deductions_ytd: dec!(0),
            undertime_minutes: 0,
            undertime_deductions: dec!(0),
            undertime_deductions_ytd: dec!(0),
            overtime_minutes: 0,
            overtime_pay: dec!(0),
            overtime_pay_ytd: dec!(0),
            expected_hours_worked: dec!(8),
            hours_worked: dec!(9),
            regular_holiday_hours: dec!(0),
            regular_holiday_hours_worked: dec!(0),
            regular_holiday_pay: dec!(0),
            regular_holiday_pay_ytd: dec!(0),
            special_holiday_hours: dec!(0),
            special_holiday_hours_worked: dec!(0),
            special_holiday_pay: dec!(0),
            special_holiday_pay_ytd: dec!(0),
            leaves: LeaveItems::default(),
            leaves_pay: dec!(0),
            leaves_pay_ytd: dec!(0),
            allowances: CompensationItems(vec![CompensationItem { name: "transport".to_string(), pay: dec!(1_000) }]),
            total_allowances: dec!(1_000),
            total_allowances_ytd: dec!(1_000),
            commissions: CompensationItems::default(),
            total_commissions: dec!(0),
            total_commissions_ytd: dec!(0),
            other_compensations: CompensationItems(vec![CompensationItem { name: "13th month accrual".to_string(), pay: dec!(500) }]),
            total_other_compensations: dec!(500),
            total_other_compensations_ytd: dec!(500),
            sss_contributions: dec!(900),
            sss_contributions_ytd: dec!(900),
            pagibig_contributions: dec!(100),
            pagibig_contributions_ytd: dec!(100),
            philhealth_contributions: dec!(500),
            philhealth_contributions_ytd: dec!(500),
            total_contributions: dec!(1_500),
            total_contributions_ytd: dec!(1_500),
            gross_income: dec!(20_000),
            gross_income_ytd: dec!(20_000),
            taxable_income: dec!(19_500),
            taxable_income_ytd: dec!(19_500),
            withheld_tax: dec!(1_504.20),
            withheld_tax_ytd: dec!(1_504.20),
            net_income: dec!(18_495.80),
            net_income_ytd: dec!(18_495.80),
        };

        let saved_snapshot = employee_ytd::Model {
            id: Uuid::new_v4(),
            created_at: timestamp(16, 0, 0),
            updated_at: timestamp(16, 0, 0),
            user_id: employee.id,
            figures: YtdFigures::of_payroll(&saved),
        };

        let completed_period = period::Model {
            status: PeriodStatus::Completed,
            ..period.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![settings()]])
            .append_query_results([vec![profile(employee.id)]])
            .append_query_results([vec![on_time_record(employee.id, 1)]])
            .append_query_results([Vec::<holiday::Model>::new()])
            .append_query_results([Vec::<employee_ytd::Model>::new()])
            .append_query_results([Vec::<payroll::Model>::new(), vec![saved.clone()]])
            .append_query_results([vec![saved_snapshot]])
            .append_query_results([vec![completed_period]])
            .into_connection();

        let result = PayrollGenerator::default()
            .generate(&db, &period, &employee, &PayrollOverrides::default())
            .await
            .unwrap();

        assert_eq!(result, saved);
    }
}
