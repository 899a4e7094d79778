use super::*;

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct CreatePeriod {
    pub(super) period_type: Option<PeriodType>,
    pub(super) start_date: NaiveDate,
    pub(super) end_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct GeneratePayroll {
    pub(super) employee_id: Uuid,
    #[serde(flatten)]
    pub(super) overrides: PayrollOverrides,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct PeriodPayrolls {
    pub(super) payrolls: Vec<payroll::Model>,
    pub(super) total_net_income: Decimal,
}
