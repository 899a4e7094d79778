use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::{
    entity::{holiday, payroll::LeaveItem, sea_orm_active_enums::HolidayType, time_record},
    payroll::{LeaveRequest, MINUTES_PER_HOUR},
    utils,
};

pub struct ReconcilerConfig {
    pub grace_period_minutes: i64,
    pub minimum_overtime_minutes: i64,
    pub working_hours_per_day: i64,
    pub hourly_rate: Decimal,
    pub regular_holiday_rate: Decimal,
    pub special_holiday_rate: Decimal,
}

/// Scheduled vs worked hours on one holiday type. Scheduled hours accrue
/// from the expected span whether or not the employee showed up; worked
/// hours and premium pay only from actual attendance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTally {
    pub hours: Decimal,
    pub hours_worked: Decimal,
    pub pay: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub worked_minutes: i64,
    pub absent_minutes: i64,
    pub late_minutes: i64,
    pub undertime_minutes: i64,
    pub overtime_minutes: i64,
    pub absent_deductions: Decimal,
    pub late_deductions: Decimal,
    pub undertime_deductions: Decimal,
    pub overtime_pay: Decimal,
    pub expected_hours_worked: Decimal,
    pub hours_worked: Decimal,
    pub regular_holiday: HolidayTally,
    pub special_holiday: HolidayTally,
    pub leaves: Vec<LeaveItem>,
    pub leaves_pay: Decimal,
}

impl AttendanceSummary {
    fn holiday_tally_mut(&mut self, holiday_type: &HolidayType) -> &mut HolidayTally {
        match holiday_type {
            HolidayType::Regular => &mut self.regular_holiday,
            HolidayType::Special => &mut self.special_holiday,
        }
    }
}

/// Folds one period's time records into attendance figures.
///
/// A record with both actual clocks missing, or with only one side stamped,
/// counts as a full-day absence. A record without expected clocks cannot be
/// reconciled, so no late/undertime/overtime accrues for it.
pub fn reconcile(
    records: &[time_record::Model],
    holidays: &[holiday::Model],
    leaves: &[LeaveRequest],
    config: &ReconcilerConfig,
) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();

    for record in records {
        let expected = expected_clocks(record);
        let actual = actual_clocks(record);
        let holiday = holidays.iter().find(|holiday| holiday.date == record.date);

        if let (Some(holiday), Some((expected_in, expected_out))) = (holiday, expected) {
            summary.holiday_tally_mut(&holiday.holiday_type).hours
                += minutes_to_hours(utils::span_minutes(expected_in, expected_out));
        }

        match actual {
            Some((clock_in, clock_out)) => {
                let worked = utils::span_minutes(clock_in, clock_out);
                summary.worked_minutes += worked;

                if let Some(holiday) = holiday {
                    summary.holiday_tally_mut(&holiday.holiday_type).hours_worked
                        += minutes_to_hours(worked);
                }

                if let Some((expected_in, expected_out)) = expected {
                    summary.late_minutes += utils::minutes_after(
                        clock_in,
                        utils::shift_minutes(expected_in, config.grace_period_minutes),
                    );
                    summary.undertime_minutes += utils::minutes_before(clock_out, expected_out);
                    summary.overtime_minutes += utils::minutes_after(
                        clock_out,
                        utils::shift_minutes(expected_out, config.minimum_overtime_minutes),
                    );
                }
            }
            None => {
                summary.absent_minutes += config.working_hours_per_day * MINUTES_PER_HOUR;
            }
        }

        for leave in leaves.iter().filter(|leave| leave.date == record.date) {
            let pay = (leave.hours * config.hourly_rate).round_dp(2);

            summary.leaves_pay += pay;
            summary.leaves.push(LeaveItem {
                date: leave.date,
                hours: leave.hours,
                pay,
            });
        }
    }

    summary.absent_deductions = minutes_to_pay(summary.absent_minutes, config.hourly_rate);
    summary.late_deductions = minutes_to_pay(summary.late_minutes, config.hourly_rate);
    summary.undertime_deductions = minutes_to_pay(summary.undertime_minutes, config.hourly_rate);
    summary.overtime_pay = minutes_to_pay(summary.overtime_minutes, config.hourly_rate);

    summary.expected_hours_worked = Decimal::from(records.len() as i64 * config.working_hours_per_day);
    summary.hours_worked = minutes_to_hours(summary.worked_minutes);

    summary.regular_holiday.pay = premium_pay(
        summary.regular_holiday.hours_worked,
        config.hourly_rate,
        config.regular_holiday_rate,
    );
    summary.special_holiday.pay = premium_pay(
        summary.special_holiday.hours_worked,
        config.hourly_rate,
        config.special_holiday_rate,
    );

    summary
}

fn actual_clocks(record: &time_record::Model) -> Option<(NaiveTime, NaiveTime)> {
    match (record.clock_in.as_ref(), record.clock_out.as_ref()) {
        (Some(clock_in), Some(clock_out)) => {
            Some((utils::time_of_day(clock_in), utils::time_of_day(clock_out)))
        }
        _ => None,
    }
}

fn expected_clocks(record: &time_record::Model) -> Option<(NaiveTime, NaiveTime)> {
    match (record.expected_clock_in.as_ref(), record.expected_clock_out.as_ref()) {
        (Some(expected_in), Some(expected_out)) => {
            Some((utils::time_of_day(expected_in), utils::time_of_day(expected_out)))
        }
        _ => None,
    }
}

fn minutes_to_pay(minutes: i64, hourly_rate: Decimal) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR) * hourly_rate).round_dp(2)
}

fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)).round_dp(2)
}

/// Base pay for the worked holiday hours plus the premium on top
fn premium_pay(hours_worked: Decimal, hourly_rate: Decimal, holiday_rate: Decimal) -> Decimal {
    (hours_worked * hourly_rate * (Decimal::ONE + holiday_rate)).round_dp(2)
}
