use sea_orm_migration::{prelude::{extension::postgres::TypeDropStatement, *}, sea_orm::{ActiveEnum, DbBackend, DeriveActiveEnum, EnumIter, Schema}};

use crate::{setup_user_table_fk, util::{default_table_statement, default_user_table_statement, DefaultColumn}};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(DbBackend::Postgres);

        manager
            .create_type(
                schema.create_enum_from_active_enum::<RoleType>()
            ).await.unwrap();
        manager
            .create_type(
                schema.create_enum_from_active_enum::<PeriodType>()
            ).await.unwrap();
        manager
            .create_type(
                schema.create_enum_from_active_enum::<PeriodStatus>()
            ).await.unwrap();
        manager
            .create_type(
                schema.create_enum_from_active_enum::<HolidayType>()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(User::Table)
                .col(ColumnDef::new(User::Username)
                    .text()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(User::Password)
                    .binary()
                    .not_null()) // Password should be in a hashed format
                .col(ColumnDef::new(User::Role)
                    .custom(RoleType::name())
                    .not_null())
                .take()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(Settings::Table)
                .col(ColumnDef::new(Settings::PeriodCycle)
                    .custom(PeriodType::name())
                    .not_null())
                .col(ColumnDef::new(Settings::GracePeriodMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(Settings::MinimumOvertimeMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .take()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(SalaryProfile::Table)
                .col(ColumnDef::new(SalaryProfile::UserId)
                    .uuid()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(SalaryProfile::BasicSalary)
                    .decimal()
                    .not_null()) // Monthly denominated
                .col(ColumnDef::new(SalaryProfile::DailyRate)
                    .decimal()
                    .not_null())
                .col(ColumnDef::new(SalaryProfile::HourlyRate)
                    .decimal()
                    .not_null())
                .col(ColumnDef::new(SalaryProfile::WorkingHoursPerDay)
                    .small_integer()
                    .not_null())
                .col(ColumnDef::new(SalaryProfile::OvertimeRate)
                    .decimal()
                    .not_null())
                .col(ColumnDef::new(SalaryProfile::RegularHolidayRate)
                    .decimal()
                    .not_null())
                .col(ColumnDef::new(SalaryProfile::SpecialHolidayRate)
                    .decimal()
                    .not_null())
                .col(ColumnDef::new(SalaryProfile::Allowances)
                    .json_binary()
                    .not_null())
                .col(ColumnDef::new(SalaryProfile::Commissions)
                    .json_binary()
                    .not_null())
                .col(ColumnDef::new(SalaryProfile::OtherCompensations)
                    .json_binary()
                    .not_null())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(SalaryProfile::Table, SalaryProfile::UserId)
            .to(User::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_user_table_statement()
                .table(Period::Table)
                .col(ColumnDef::new(Period::PeriodType)
                    .custom(PeriodType::name())
                    .not_null())
                .col(ColumnDef::new(Period::StartDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(Period::EndDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(Period::Status)
                    .custom(PeriodStatus::name())
                    .not_null()
                    .default("pending"))
                .take()
            ).await.unwrap();
        setup_user_table_fk!(manager, Period::Table);

        manager
            .create_table(default_table_statement()
                .table(TimeRecord::Table)
                .col(ColumnDef::new(TimeRecord::UserId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(TimeRecord::Date)
                    .date()
                    .not_null())
                .col(ColumnDef::new(TimeRecord::ExpectedClockIn)
                    .timestamp_with_time_zone())
                .col(ColumnDef::new(TimeRecord::ExpectedClockOut)
                    .timestamp_with_time_zone())
                .col(ColumnDef::new(TimeRecord::ClockIn)
                    .timestamp_with_time_zone())
                .col(ColumnDef::new(TimeRecord::ClockOut)
                    .timestamp_with_time_zone())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(TimeRecord::Table, TimeRecord::UserId)
            .to(User::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        // One scheduled attendance day per employee
        manager.create_index(Index::create()
            .name("idx-time-record-user-date")
            .table(TimeRecord::Table)
            .col(TimeRecord::UserId)
            .col(TimeRecord::Date)
            .unique()
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(Holiday::Table)
                .col(ColumnDef::new(Holiday::Name)
                    .text()
                    .not_null())
                .col(ColumnDef::new(Holiday::Date)
                    .date()
                    .not_null())
                .col(ColumnDef::new(Holiday::HolidayType)
                    .custom(HolidayType::name())
                    .not_null())
                .take()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(EmployeeYtd::Table)
                .col(ColumnDef::new(EmployeeYtd::UserId)
                    .uuid()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(EmployeeYtd::Figures)
                    .json_binary()
                    .not_null())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(EmployeeYtd::Table, EmployeeYtd::UserId)
            .to(User::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        let mut payroll = default_table_statement()
            .table(Payroll::Table)
            .col(ColumnDef::new(Payroll::PeriodId)
                .uuid()
                .not_null())
            .col(ColumnDef::new(Payroll::UserId)
                .uuid()
                .not_null())
            .col(ColumnDef::new(Payroll::BasicSalary)
                .decimal()
                .not_null())
            .col(ColumnDef::new(Payroll::AbsentMinutes)
                .big_integer()
                .not_null())
            .col(ColumnDef::new(Payroll::LateMinutes)
                .big_integer()
                .not_null())
            .col(ColumnDef::new(Payroll::UndertimeMinutes)
                .big_integer()
                .not_null())
            .col(ColumnDef::new(Payroll::OvertimeMinutes)
                .big_integer()
                .not_null())
            .col(ColumnDef::new(Payroll::ExpectedHoursWorked)
                .decimal()
                .not_null())
            .col(ColumnDef::new(Payroll::HoursWorked)
                .decimal()
                .not_null())
            .col(ColumnDef::new(Payroll::RegularHolidayHours)
                .decimal()
                .not_null())
            .col(ColumnDef::new(Payroll::RegularHolidayHoursWorked)
                .decimal()
                .not_null())
            .col(ColumnDef::new(Payroll::SpecialHolidayHours)
                .decimal()
                .not_null())
            .col(ColumnDef::new(Payroll::SpecialHolidayHoursWorked)
                .decimal()
                .not_null())
            .col(ColumnDef::new(Payroll::Leaves)
                .json_binary()
                .not_null())
            .col(ColumnDef::new(Payroll::Allowances)
                .json_binary()
                .not_null())
            .col(ColumnDef::new(Payroll::Commissions)
                .json_binary()
                .not_null())
            .col(ColumnDef::new(Payroll::OtherCompensations)
                .json_binary()
                .not_null())
            .take();

        // Money figures all carry a year-to-date counterpart
        for column in [
            Payroll::AbsentDeductions,
            Payroll::LateDeductions,
            Payroll::UndertimeDeductions,
            Payroll::OvertimePay,
            Payroll::RegularHolidayPay,
            Payroll::SpecialHolidayPay,
            Payroll::LeavesPay,
            Payroll::TotalAllowances,
            Payroll::TotalCommissions,
            Payroll::TotalOtherCompensations,
            Payroll::SssContributions,
            Payroll::PagibigContributions,
            Payroll::PhilhealthContributions,
            Payroll::TotalContributions,
            Payroll::GrossIncome,
            Payroll::TaxableIncome,
            Payroll::WithheldTax,
            Payroll::NetIncome,
        ] {
            let ytd = Alias::new(format!("{}_ytd", column.to_string()));

            payroll
                .col(ColumnDef::new(column)
                    .decimal()
                    .not_null())
                .col(ColumnDef::new(ytd)
                    .decimal()
                    .not_null());
        }

        manager.create_table(payroll).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(Payroll::Table, Payroll::PeriodId)
            .to(Period::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(Payroll::Table, Payroll::UserId)
            .to(User::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        // Exactly one payroll per (period, employee); regeneration updates in place
        manager.create_index(Index::create()
            .name("idx-payroll-period-user")
            .table(Payroll::Table)
            .col(Payroll::PeriodId)
            .col(Payroll::UserId)
            .unique()
            .take()
        ).await.unwrap();

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            TableDropStatement::new().table(Payroll::Table).take(),
            TableDropStatement::new().table(EmployeeYtd::Table).take(),
            TableDropStatement::new().table(Holiday::Table).take(),
            TableDropStatement::new().table(TimeRecord::Table).take(),
            TableDropStatement::new().table(Period::Table).take(),
            TableDropStatement::new().table(SalaryProfile::Table).take(),
            TableDropStatement::new().table(Settings::Table).take(),
            TableDropStatement::new().table(User::Table).take(),
        ] {
            manager.drop_table(table).await.unwrap();
        }

        manager
            .drop_type(
                TypeDropStatement::new()
                    .name(HolidayType::name())
                    .to_owned()
            ).await.unwrap();
        manager
            .drop_type(
                TypeDropStatement::new()
                    .name(PeriodStatus::name())
                    .to_owned()
            ).await.unwrap();
        manager
            .drop_type(
                TypeDropStatement::new()
                    .name(PeriodType::name())
                    .to_owned()
            ).await.unwrap();
        manager
            .drop_type(
                TypeDropStatement::new()
                    .name(RoleType::name())
                    .to_owned()
            ).await.unwrap();

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum User {
    Table,
    Username,
    Password,
    Role,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role_type")]
enum RoleType {
    #[sea_orm(string_value = "employee")]
    Employee,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "period_type")]
enum PeriodType {
    #[sea_orm(string_value = "weekly")]
    Weekly,
    #[sea_orm(string_value = "semi-monthly")]
    SemiMonthly,
    #[sea_orm(string_value = "monthly")]
    Monthly,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "period_status")]
enum PeriodStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "holiday_type")]
enum HolidayType {
    #[sea_orm(string_value = "regular")]
    Regular,
    #[sea_orm(string_value = "special")]
    Special,
}

#[derive(Iden)]
pub(crate) enum Settings {
    Table,
    PeriodCycle,
    GracePeriodMinutes,
    MinimumOvertimeMinutes,
}

#[derive(Iden)]
pub(crate) enum SalaryProfile {
    Table,
    UserId,
    BasicSalary,
    DailyRate,
    HourlyRate,
    WorkingHoursPerDay,
    OvertimeRate,
    RegularHolidayRate,
    SpecialHolidayRate,
    Allowances,
    Commissions,
    OtherCompensations,
}

#[derive(Iden)]
enum Period {
    Table,
    PeriodType,
    StartDate,
    EndDate,
    Status,
}

#[derive(Iden)]
enum TimeRecord {
    Table,
    UserId,
    Date,
    ExpectedClockIn,
    ExpectedClockOut,
    ClockIn,
    ClockOut,
}

#[derive(Iden)]
enum Holiday {
    Table,
    Name,
    Date,
    HolidayType,
}

#[derive(Iden)]
enum EmployeeYtd {
    Table,
    UserId,
    Figures,
}

#[derive(Iden)]
enum Payroll {
    Table,
    PeriodId,
    UserId,
    BasicSalary,
    AbsentMinutes,
    AbsentDeductions,
    LateMinutes,
    LateDeductions,
    UndertimeMinutes,
    UndertimeDeductions,
    OvertimeMinutes,
    OvertimePay,
    ExpectedHoursWorked,
    HoursWorked,
    RegularHolidayHours,
    RegularHolidayHoursWorked,
    RegularHolidayPay,
    SpecialHolidayHours,
    SpecialHolidayHoursWorked,
    SpecialHolidayPay,
    Leaves,
    LeavesPay,
    Allowances,
    TotalAllowances,
    Commissions,
    TotalCommissions,
    OtherCompensations,
    TotalOtherCompensations,
    SssContributions,
    PagibigContributions,
    PhilhealthContributions,
    TotalContributions,
    GrossIncome,
    TaxableIncome,
    WithheldTax,
    NetIncome,
}
