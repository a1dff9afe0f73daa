use chrono::{Duration, NaiveDate};
use rand::Rng;

/// A half-open window of calendar dates, `[start, end)`.
///
/// The constructor rejects empty or inverted windows, so a constructed
/// range always contains at least one day and [`DateRange::sample`] is
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a date range covering `[start, end)`.
    ///
    /// # Parameters
    ///
    /// * `start` – First date inside the window.
    /// * `end` – First date past the window.
    ///
    /// # Returns
    ///
    /// * `Ok(DateRange)` if `start < end`.
    /// * `Err(String)` describing the bounds if the window is empty or
    ///   inverted.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use chrono::NaiveDate;
    /// use git_backdate::dates::DateRange;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 2, 16).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 9, 28).unwrap();
    /// let range = DateRange::new(start, end).unwrap();
    /// assert!(range.sample() >= start);
    /// ```
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<DateRange, String> {
        if end <= start {
            return Err(format!("empty date range: {} .. {}", start, end));
        }

        Ok(DateRange { start, end })
    }

    /// First date inside the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First date past the window.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Draws a date uniformly from the window at day granularity.
    ///
    /// Sampling is not seeded; two runs over the same files will produce
    /// different histories.
    ///
    /// # Returns
    ///
    /// * A date `d` with `start <= d < end`.
    pub fn sample(&self) -> NaiveDate {
        let span = (self.end - self.start).num_days();
        let offset = rand::rng().random_range(0..span);

        self.start + Duration::days(offset)
    }
}

/// The fixed window that fabricated commit dates are drawn from.
///
/// # Returns
///
/// * `Ok(DateRange)` covering `[2025-02-16, 2025-09-28)`.
/// * `Err(String)` only if the bounds fail to construct, which does not
///   happen for these constants.
pub fn history_window() -> Result<DateRange, String> {
    let start = NaiveDate::from_ymd_opt(2025, 2, 16);
    let end = NaiveDate::from_ymd_opt(2025, 9, 28);

    match (start, end) {
        (Some(s), Some(e)) => DateRange::new(s, e),
        _ => Err(String::from("invalid history window bounds")),
    }
}

/// Renders a date as the timestamp string handed to Git.
///
/// Commits land at midnight of the sampled day, ISO 8601 formatted, e.g.
/// `2025-03-14T00:00:00`.
pub fn format_timestamp(date: NaiveDate) -> String {
    format!("{}T00:00:00", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::{DateRange, format_timestamp, history_window};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(y, m, d) {
            Some(v) => v,
            None => panic!("bad test date"),
        }
    }

    #[test]
    fn samples_stay_inside_window() {
        let range = DateRange::new(date(2025, 2, 16), date(2025, 9, 28));
        match range {
            Ok(r) => {
                for _ in 0..500 {
                    let d = r.sample();
                    assert!(d >= r.start());
                    assert!(d < r.end());
                }
            }
            Err(_) => assert!(false),
        }
    }

    #[test]
    fn single_day_window_always_returns_start() {
        let range = DateRange::new(date(2025, 3, 1), date(2025, 3, 2));
        match range {
            Ok(r) => {
                for _ in 0..10 {
                    assert_eq!(r.sample(), date(2025, 3, 1));
                }
            }
            Err(_) => assert!(false),
        }
    }

    #[test]
    fn empty_window_is_rejected() {
        let range = DateRange::new(date(2025, 3, 1), date(2025, 3, 1));
        assert!(range.is_err());
    }

    #[test]
    fn inverted_window_is_rejected() {
        let range = DateRange::new(date(2025, 9, 28), date(2025, 2, 16));
        assert!(range.is_err());
    }

    #[test]
    fn history_window_has_expected_bounds() {
        let window = history_window();
        match window {
            Ok(w) => {
                assert_eq!(w.start(), date(2025, 2, 16));
                assert_eq!(w.end(), date(2025, 9, 28));
            }
            Err(_) => assert!(false),
        }
    }

    #[test]
    fn timestamp_is_midnight_iso() {
        let s = format_timestamp(date(2025, 3, 14));
        assert_eq!(s, "2025-03-14T00:00:00");
    }
}
