//! Weekly and period totals over daily summaries.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{DailySummary, PeriodTotals, WeeklyTotal};

/// Sums worked and resting hours per week-of-month bucket.
///
/// Only buckets that contain at least one day are returned, in ascending
/// bucket order.
pub fn weekly_totals(days: &[DailySummary]) -> Vec<WeeklyTotal> {
    let mut buckets: BTreeMap<u8, WeeklyTotal> = BTreeMap::new();
    for day in days {
        let total = buckets
            .entry(day.week_of_month)
            .or_insert_with(|| WeeklyTotal {
                week_of_month: day.week_of_month,
                days: 0,
                worked_hours: Decimal::ZERO,
                resting_hours: Decimal::ZERO,
            });
        total.days += 1;
        total.worked_hours += day.worked_hours;
        total.resting_hours += day.resting_hours;
    }
    buckets.into_values().collect()
}

/// Sums worked and resting hours over every day.
pub fn period_totals(days: &[DailySummary]) -> PeriodTotals {
    days.iter().fold(PeriodTotals::default(), |mut totals, day| {
        totals.days += 1;
        totals.worked_hours += day.worked_hours;
        totals.resting_hours += day.resting_hours;
        totals
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn summary(day: u32, worked: i64, resting: i64) -> DailySummary {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        DailySummary {
            employee_id: "E1".to_string(),
            date,
            worked_hours: Decimal::from(worked),
            resting_hours: Decimal::from(resting),
            first_in: date.and_hms_opt(8, 0, 0).unwrap(),
            last_out: date.and_hms_opt(17, 0, 0).unwrap(),
            week_of_month: crate::calculation::week_of_month(date),
        }
    }

    #[test]
    fn test_weekly_totals_skip_empty_buckets() {
        let days = vec![summary(1, 8, 1), summary(2, 7, 0), summary(30, 4, 0)];

        let weekly = weekly_totals(&days);
        assert_eq!(weekly.len(), 2);

        assert_eq!(weekly[0].week_of_month, 1);
        assert_eq!(weekly[0].days, 2);
        assert_eq!(weekly[0].worked_hours, Decimal::from(15));
        assert_eq!(weekly[0].resting_hours, Decimal::from(1));

        assert_eq!(weekly[1].week_of_month, 5);
        assert_eq!(weekly[1].days, 1);
        assert_eq!(weekly[1].worked_hours, Decimal::from(4));
    }

    #[test]
    fn test_period_totals() {
        let days = vec![summary(4, 8, 1), summary(11, 6, 2)];

        let totals = period_totals(&days);
        assert_eq!(totals.days, 2);
        assert_eq!(totals.worked_hours, Decimal::from(14));
        assert_eq!(totals.resting_hours, Decimal::from(3));
    }

    #[test]
    fn test_totals_of_nothing() {
        assert!(weekly_totals(&[]).is_empty());
        assert_eq!(period_totals(&[]), PeriodTotals::default());
    }
}
