use crate::core::age::calculate_age;
use crate::core::parser::parse_birthday;
use crate::domain::model::{AggregateReport, CalendarDate, PersonCandles, PersonRecord};
use crate::domain::ports::Clock;
use crate::utils::error::Result;

/// Adds up candles for `people`, all measured against the same `today`.
///
/// Details keep the input order. The first birthday that fails to parse
/// aborts the whole call.
pub fn aggregate(people: &[PersonRecord], today: CalendarDate) -> Result<AggregateReport> {
    let mut total: i64 = 0;
    let mut details = Vec::with_capacity(people.len());

    for person in people {
        let birth = parse_birthday(&person.birthday).inspect_err(|e| {
            tracing::debug!(name = %person.name, error = %e, "rejecting birthday");
        })?;
        let candles = calculate_age(birth, today);

        tracing::debug!(name = %person.name, birthday = %birth, candles, "counted candles");

        total += i64::from(candles);
        details.push(PersonCandles {
            name: person.name.clone(),
            birthday: birth.to_string(),
            candles,
        });
    }

    Ok(AggregateReport { total, details })
}

pub struct BirthdayAggregator<C: Clock> {
    clock: C,
}

impl<C: Clock> BirthdayAggregator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Reads `today` from the clock once, then aggregates.
    pub fn run(&self, people: &[PersonRecord]) -> Result<AggregateReport> {
        let today = self.clock.today();
        tracing::debug!(%today, people = people.len(), "starting candle aggregation");

        let report = aggregate(people, today)?;

        tracing::info!(
            total = report.total,
            people = report.details.len(),
            "candle aggregation complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use crate::utils::error::CandleError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn today() -> CalendarDate {
        CalendarDate::from_ymd(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_ron_and_jake() {
        let people = vec![
            PersonRecord::new("Ron", "1981-01-14"),
            PersonRecord::new("Jake", "2009-09-24"),
        ];

        let report = aggregate(&people, today()).unwrap();

        assert_eq!(report.total, 57);
        assert_eq!(report.details.len(), 2);
        assert_eq!(report.details[0].name, "Ron");
        assert_eq!(report.details[0].birthday, "1981-01-14");
        assert_eq!(report.details[0].candles, 43);
        assert_eq!(report.details[1].name, "Jake");
        assert_eq!(report.details[1].birthday, "2009-09-24");
        assert_eq!(report.details[1].candles, 14);
    }

    #[test]
    fn test_empty_input() {
        let report = aggregate(&[], today()).unwrap();
        assert_eq!(report, AggregateReport { total: 0, details: vec![] });
    }

    #[test]
    fn test_structured_birthday_gets_canonical_text() {
        let people = vec![PersonRecord::new(
            "Charlie",
            CalendarDate::from_ymd(2010, 3, 8).unwrap(),
        )];

        let report = aggregate(&people, today()).unwrap();
        assert_eq!(report.details[0].birthday, "2010-03-08");
        assert_eq!(report.details[0].candles, 14);
    }

    #[test]
    fn test_edge_year_birthdays_stay_canonical() {
        let people = vec![
            PersonRecord::new("First", CalendarDate::from_ymd(1, 1, 1).unwrap()),
            PersonRecord::new("Last", CalendarDate::from_ymd(9999, 12, 31).unwrap()),
        ];

        let report = aggregate(&people, today()).unwrap();
        assert_eq!(report.details[0].birthday, "0001-01-01");
        assert_eq!(report.details[0].candles, 2023);
        assert_eq!(report.details[1].birthday, "9999-12-31");
        for detail in &report.details {
            assert_eq!(detail.birthday.parse::<CalendarDate>().unwrap().to_string(), detail.birthday);
        }
    }

    #[test]
    fn test_bad_entry_aborts_batch() {
        let people = vec![
            PersonRecord::new("Ron", "1981-01-14"),
            PersonRecord::new("Bad", "14-01-1981"),
            PersonRecord::new("Jake", "2009-09-24"),
        ];

        assert!(matches!(
            aggregate(&people, today()),
            Err(CandleError::InvalidFormat)
        ));
    }

    #[test]
    fn test_total_matches_sum_of_details() {
        let people = vec![
            PersonRecord::new("A", "2000-01-01"),
            PersonRecord::new("B", "1950-12-31"),
            PersonRecord::new("C", "2024-06-15"),
            PersonRecord::new("D", "2030-01-01"),
        ];

        let report = aggregate(&people, today()).unwrap();
        let sum: i64 = report.details.iter().map(|d| i64::from(d.candles)).sum();
        assert_eq!(report.total, sum);
        let names: Vec<&str> = report.details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }

    struct CountingClock {
        calls: AtomicUsize,
        date: CalendarDate,
    }

    impl Clock for CountingClock {
        fn today(&self) -> CalendarDate {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.date
        }
    }

    #[test]
    fn test_run_reads_clock_once() {
        let clock = CountingClock {
            calls: AtomicUsize::new(0),
            date: today(),
        };
        let aggregator = BirthdayAggregator::new(clock);
        let people = vec![
            PersonRecord::new("Ron", "1981-01-14"),
            PersonRecord::new("Jake", "2009-09-24"),
            PersonRecord::new("Charlie", "2010-03-08"),
        ];

        let report = aggregator.run(&people).unwrap();

        assert_eq!(report.total, 71);
        assert_eq!(aggregator.clock.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_with_fixed_clock() {
        let aggregator = BirthdayAggregator::new(FixedClock::new(today()));
        let report = aggregator
            .run(&[PersonRecord::new("Ron", "1981-01-14")])
            .unwrap();
        assert_eq!(report.total, 43);
    }
}
