pub mod prelude;

pub mod employee_ytd;
pub mod holiday;
pub mod payroll;
pub mod period;
pub mod salary_profile;
pub mod sea_orm_active_enums;
pub mod settings;
pub mod time_record;
pub mod user;
