pub use super::employee_ytd::Entity as EmployeeYtd;
pub use super::holiday::Entity as Holiday;
pub use super::payroll::Entity as Payroll;
pub use super::period::Entity as Period;
pub use super::salary_profile::Entity as SalaryProfile;
pub use super::settings::Entity as Settings;
pub use super::time_record::Entity as TimeRecord;
pub use super::user::Entity as User;
