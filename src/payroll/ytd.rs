use crate::entity::{employee_ytd::YtdFigures, payroll};

impl YtdFigures {
    /// Pure fold: every figure of `current` added onto this snapshot
    pub fn accumulate(&self, current: &YtdFigures) -> YtdFigures {
        YtdFigures {
            absent_deductions: self.absent_deductions + current.absent_deductions,
            late_deductions: self.late_deductions + current.late_deductions,
            undertime_deductions: self.undertime_deductions + current.undertime_deductions,
            overtime_pay: self.overtime_pay + current.overtime_pay,
            regular_holiday_pay: self.regular_holiday_pay + current.regular_holiday_pay,
            special_holiday_pay: self.special_holiday_pay + current.special_holiday_pay,
            leaves_pay: self.leaves_pay + current.leaves_pay,
            total_allowances: self.total_allowances + current.total_allowances,
            total_commissions: self.total_commissions + current.total_commissions,
            total_other_compensations: self.total_other_compensations + current.total_other_compensations,
            sss_contributions: self.sss_contributions + current.sss_contributions,
            pagibig_contributions: self.pagibig_contributions + current.pagibig_contributions,
            philhealth_contributions: self.philhealth_contributions + current.philhealth_contributions,
            total_contributions: self.total_contributions + current.total_contributions,
            gross_income: self.gross_income + current.gross_income,
            taxable_income: self.taxable_income + current.taxable_income,
            withheld_tax: self.withheld_tax + current.withheld_tax,
            net_income: self.net_income + current.net_income,
        }
    }

    /// Removes an already-persisted payroll's figures from this snapshot,
    /// so regenerating the same period never double-applies its deltas
    pub fn rollback(&self, previous: &YtdFigures) -> YtdFigures {
        YtdFigures {
            absent_deductions: self.absent_deductions - previous.absent_deductions,
            late_deductions: self.late_deductions - previous.late_deductions,
            undertime_deductions: self.undertime_deductions - previous.undertime_deductions,
            overtime_pay: self.overtime_pay - previous.overtime_pay,
            regular_holiday_pay: self.regular_holiday_pay - previous.regular_holiday_pay,
            special_holiday_pay: self.special_holiday_pay - previous.special_holiday_pay,
            leaves_pay: self.leaves_pay - previous.leaves_pay,
            total_allowances: self.total_allowances - previous.total_allowances,
            total_commissions: self.total_commissions - previous.total_commissions,
            total_other_compensations: self.total_other_compensations - previous.total_other_compensations,
            sss_contributions: self.sss_contributions - previous.sss_contributions,
            pagibig_contributions: self.pagibig_contributions - previous.pagibig_contributions,
            philhealth_contributions: self.philhealth_contributions - previous.philhealth_contributions,
            total_contributions: self.total_contributions - previous.total_contributions,
            gross_income: self.gross_income - previous.gross_income,
            taxable_income: self.taxable_income - previous.taxable_income,
            withheld_tax: self.withheld_tax - previous.withheld_tax,
            net_income: self.net_income - previous.net_income,
        }
    }

    /// The period figures a persisted payroll row contributed to its snapshot
    pub fn of_payroll(payroll: &payroll::Model) -> YtdFigures {
        YtdFigures {
            absent_deductions: payroll.absent_deductions,
            late_deductions: payroll.late_deductions,
            undertime_deductions: payroll.undertime_deductions,
            overtime_pay: payroll.overtime_pay,
            regular_holiday_pay: payroll.regular_holiday_pay,
            special_holiday_pay: payroll.special_holiday_pay,
            leaves_pay: payroll.leaves_pay,
            total_allowances: payroll.total_allowances,
            total_commissions: payroll.total_commissions,
            total_other_compensations: payroll.total_other_compensations,
            sss_contributions: payroll.sss_contributions,
            pagibig_contributions: payroll.pagibig_contributions,
            philhealth_contributions: payroll.philhealth_contributions,
            total_contributions: payroll.total_contributions,
            gross_income: payroll.gross_income,
            taxable_income: payroll.taxable_income,
            withheld_tax: payroll.withheld_tax,
            net_income: payroll.net_income,
        }
    }
}
