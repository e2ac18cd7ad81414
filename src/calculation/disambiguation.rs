//! Batch-level day/month order disambiguation.
//!
//! Every cell is read twice, once month-first and once day-first. Each reading
//! votes for its most frequent (year, month); the reading whose own cluster is
//! larger wins the whole batch, and ties go to day-first. There is no per-cell
//! inspection of "day > 12": a batch where every cell is ambiguous still gets
//! resolved by whichever reading clusters better.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{DateOrder, DominantPeriod, HypothesisOutcome};

use super::date_parsing::parse_dates;

/// The outcome of resolving a batch of date cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateResolution {
    /// One entry per input cell under the winning reading.
    pub dates: Vec<Option<NaiveDate>>,
    /// The winning reading's own dominant (year, month).
    pub period: DominantPeriod,
    /// The winning reading.
    pub order: DateOrder,
    /// Dominant (year, month) across both readings combined.
    pub provisional_period: DominantPeriod,
    /// How the month-first reading fared.
    pub month_first: HypothesisOutcome,
    /// How the day-first reading fared.
    pub day_first: HypothesisOutcome,
}

/// Finds the most frequent (year, month) among the present dates.
///
/// Returns the period and its count, or `None` when no date is present.
/// When several periods share the highest count the earliest one wins.
///
/// # Example
///
/// ```
/// use punch_timesheet::calculation::dominant_period;
/// use punch_timesheet::models::DominantPeriod;
/// use chrono::NaiveDate;
///
/// let dates = [
///     NaiveDate::from_ymd_opt(2024, 3, 1),
///     NaiveDate::from_ymd_opt(2024, 3, 2),
///     NaiveDate::from_ymd_opt(2024, 4, 1),
///     None,
/// ];
/// assert_eq!(dominant_period(&dates), Some((DominantPeriod::new(2024, 3), 2)));
/// assert_eq!(dominant_period(&[None, None]), None);
/// ```
pub fn dominant_period<'a, I>(dates: I) -> Option<(DominantPeriod, usize)>
where
    I: IntoIterator<Item = &'a Option<NaiveDate>>,
{
    let mut counts: BTreeMap<DominantPeriod, usize> = BTreeMap::new();
    for date in dates.into_iter().flatten() {
        *counts.entry(DominantPeriod::of(*date)).or_insert(0) += 1;
    }

    let mut best: Option<(DominantPeriod, usize)> = None;
    for (period, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((period, count));
        }
    }
    best
}

/// Resolves the day/month order for a whole column of date cells.
///
/// Returns `None` when the input is empty or no cell parses under either
/// reading. Otherwise the returned [`DateResolution`] carries the winning
/// reading's per-row dates and its own dominant period.
///
/// # Examples
///
/// ```
/// use punch_timesheet::calculation::resolve_dates;
/// use punch_timesheet::models::{DateOrder, DominantPeriod};
/// use chrono::NaiveDate;
///
/// // Mostly March when read day-first; month-first scatters across months.
/// let cells = ["05-03-2024", "06-03-2024", "07-03-2024", "19-03-2024"];
/// let resolution = resolve_dates(&cells).unwrap();
///
/// assert_eq!(resolution.order, DateOrder::DayFirst);
/// assert_eq!(resolution.period, DominantPeriod::new(2024, 3));
/// assert_eq!(resolution.dates[0], NaiveDate::from_ymd_opt(2024, 3, 5));
///
/// assert!(resolve_dates::<&str>(&[]).is_none());
/// assert!(resolve_dates(&["n/a", ""]).is_none());
/// ```
pub fn resolve_dates<S: AsRef<str>>(cells: &[S]) -> Option<DateResolution> {
    let month_first_dates = parse_dates(cells, DateOrder::MonthFirst);
    let day_first_dates = parse_dates(cells, DateOrder::DayFirst);

    let (provisional_period, provisional_count) =
        dominant_period(month_first_dates.iter().chain(day_first_dates.iter()))?;

    let month_first = outcome(DateOrder::MonthFirst, &month_first_dates);
    let day_first = outcome(DateOrder::DayFirst, &day_first_dates);

    debug!(
        provisional_period = %provisional_period,
        provisional_count,
        month_first_count = month_first.count,
        day_first_count = day_first.count,
        "Compared date readings"
    );

    let (order, dates, period) = if day_first.count >= month_first.count {
        (DateOrder::DayFirst, day_first_dates, day_first.period)
    } else {
        (DateOrder::MonthFirst, month_first_dates, month_first.period)
    };

    Some(DateResolution {
        dates,
        period: period?,
        order,
        provisional_period,
        month_first,
        day_first,
    })
}

fn outcome(order: DateOrder, dates: &[Option<NaiveDate>]) -> HypothesisOutcome {
    let parsed = dates.iter().filter(|d| d.is_some()).count();
    match dominant_period(dates) {
        Some((period, count)) => HypothesisOutcome {
            order,
            parsed,
            period: Some(period),
            count,
        },
        None => HypothesisOutcome {
            order,
            parsed,
            period: None,
            count: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_empty_input_has_no_resolution() {
        let cells: Vec<String> = Vec::new();
        assert!(resolve_dates(&cells).is_none());
    }

    #[test]
    fn test_march_dominant_batch_resolves_day_first() {
        let mut cells = vec!["05-03-2024"; 2];
        cells.extend(["12-03-2024", "14-03-2024", "20-03-2024", "28-03-2024"]);

        let resolution = resolve_dates(&cells).unwrap();
        assert_eq!(resolution.order, DateOrder::DayFirst);
        assert_eq!(resolution.period, DominantPeriod::new(2024, 3));
        assert_eq!(resolution.dates[0], date(2024, 3, 5));
        assert_eq!(resolution.dates[1], date(2024, 3, 5));
    }

    #[test]
    fn test_month_first_batch_resolves_month_first() {
        let cells = ["03-05-2024", "03-06-2024", "03-07-2024", "03-19-2024"];

        let resolution = resolve_dates(&cells).unwrap();
        assert_eq!(resolution.order, DateOrder::MonthFirst);
        assert_eq!(resolution.period, DominantPeriod::new(2024, 3));
        assert_eq!(resolution.dates[0], date(2024, 3, 5));
        assert_eq!(resolution.month_first.count, 4);
        // 03-19 falls back to 19 March under day-first; the rest scatter.
        assert_eq!(resolution.day_first.count, 1);
    }

    #[test]
    fn test_one_ambiguous_among_unambiguous_april() {
        let mut cells = vec!["03-04-2024"];
        cells.extend(std::iter::repeat_n("15-04-2024", 9));

        let resolution = resolve_dates(&cells).unwrap();

        assert_eq!(resolution.day_first.period, Some(DominantPeriod::new(2024, 4)));
        assert_eq!(resolution.month_first.period, Some(DominantPeriod::new(2024, 4)));
        assert_eq!(resolution.day_first.count, 10);
        assert_eq!(resolution.month_first.count, 9);

        assert_eq!(resolution.order, DateOrder::DayFirst);
        assert_eq!(resolution.period, DominantPeriod::new(2024, 4));
        assert_eq!(resolution.dates[0], date(2024, 4, 3));
    }

    #[test]
    fn test_tie_favours_day_first() {
        // Year-first cells read identically under both orders.
        let cells = ["2024-03-05", "2024-03-06"];

        let resolution = resolve_dates(&cells).unwrap();
        assert_eq!(resolution.day_first.count, resolution.month_first.count);
        assert_eq!(resolution.order, DateOrder::DayFirst);
    }

    #[test]
    fn test_all_ambiguous_batch_picks_larger_cluster() {
        // Day-first: 1 Feb, 2 Feb, 3 Feb, 4 Feb. Month-first: four different months.
        let cells = ["01-02-2024", "02-02-2024", "03-02-2024", "04-02-2024"];

        let resolution = resolve_dates(&cells).unwrap();
        assert_eq!(resolution.order, DateOrder::DayFirst);
        assert_eq!(resolution.period, DominantPeriod::new(2024, 2));
        assert_eq!(resolution.month_first.count, 1);
        assert_eq!(resolution.day_first.count, 4);
    }

    #[test]
    fn test_unparseable_cells_stay_absent_in_output() {
        let cells = ["05-03-2024", "garbage", "", "06-03-2024"];

        let resolution = resolve_dates(&cells).unwrap();
        assert_eq!(resolution.dates.len(), 4);
        assert!(resolution.dates[1].is_none());
        assert!(resolution.dates[2].is_none());
        assert_eq!(resolution.day_first.parsed, 2);
    }

    #[test]
    fn test_provisional_period_counts_both_readings() {
        // Day-first gives two in March and one in April; month-first gives May,
        // June and April. Combined, March and April both have two.
        let cells = ["05-03-2024", "06-03-2024", "04-04-2024"];

        let resolution = resolve_dates(&cells).unwrap();
        assert_eq!(resolution.provisional_period, DominantPeriod::new(2024, 3));
    }

    #[test]
    fn test_dominant_period_tie_picks_earliest() {
        let dates = [date(2024, 5, 1), date(2024, 4, 1), date(2023, 12, 1)];
        assert_eq!(
            dominant_period(&dates),
            Some((DominantPeriod::new(2023, 12), 1))
        );
    }

    #[test]
    fn test_dominant_period_excludes_stray_adjacent_month() {
        let dates = [
            date(2024, 2, 29),
            date(2024, 3, 1),
            date(2024, 3, 4),
            date(2024, 3, 5),
        ];
        assert_eq!(
            dominant_period(&dates),
            Some((DominantPeriod::new(2024, 3), 3))
        );
    }

    fn date_cell() -> impl Strategy<Value = String> {
        prop_oneof![
            (1u32..=31, 1u32..=12, 2020i32..=2026)
                .prop_map(|(a, b, y)| format!("{:02}-{:02}-{}", a, b, y)),
            (1u32..=12, 1u32..=31, 2020i32..=2026)
                .prop_map(|(a, b, y)| format!("{:02}/{:02}/{}", a, b, y)),
            "[a-z ]{0,8}",
        ]
    }

    proptest! {
        #[test]
        fn prop_resolution_is_deterministic(cells in prop::collection::vec(date_cell(), 0..40)) {
            prop_assert_eq!(resolve_dates(&cells), resolve_dates(&cells));
        }

        #[test]
        fn prop_parseable_batches_always_resolve(
            days in prop::collection::vec((1u32..=28, 1u32..=12), 1..30)
        ) {
            let cells: Vec<String> = days
                .iter()
                .map(|(d, m)| format!("{:02}-{:02}-2024", d, m))
                .collect();

            let resolution = resolve_dates(&cells);
            prop_assert!(resolution.is_some());
            let resolution = resolution.unwrap();
            prop_assert_eq!(resolution.dates.len(), cells.len());
        }

        #[test]
        fn prop_winner_count_is_not_exceeded(cells in prop::collection::vec(date_cell(), 1..40)) {
            if let Some(resolution) = resolve_dates(&cells) {
                let (winner, loser) = match resolution.order {
                    DateOrder::DayFirst => (&resolution.day_first, &resolution.month_first),
                    DateOrder::MonthFirst => (&resolution.month_first, &resolution.day_first),
                };
                prop_assert!(winner.count >= loser.count);
                prop_assert_eq!(winner.period, Some(resolution.period));
            }
        }
    }
}
