use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A day with at least one post, embedded into the page as JSON.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    /// `YYYY-MM-DD`
    pub date: String,
    pub url: String,
}

/// Year range selectable in the calendar header.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
}

/// The month currently shown by the calendar widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl CalendarMonth {
    pub fn containing(date: NaiveDate) -> CalendarMonth {
        CalendarMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(self) -> CalendarMonth {
        if self.month == 1 {
            CalendarMonth {
                year: self.year - 1,
                month: 12,
            }
        } else {
            CalendarMonth {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> CalendarMonth {
        if self.month == 12 {
            CalendarMonth {
                year: self.year + 1,
                month: 1,
            }
        } else {
            CalendarMonth {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Key into the event map, matching the embedded JSON format.
    pub fn day_key(self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    /// Sunday-first grid of the month. `None` cells pad the first and last
    /// week so every row has seven entries.
    pub fn weeks(self) -> Vec<[Option<u32>; 7]> {
        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month, 1) else {
            return Vec::new();
        };
        let next_month = self.next();
        let days_in_month = NaiveDate::from_ymd_opt(next_month.year, next_month.month, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31);

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut weekday = first.weekday().num_days_from_sunday() as usize;
        for day in 1..=days_in_month {
            week[weekday] = Some(day);
            if weekday == 6 {
                weeks.push(week);
                week = [None; 7];
                weekday = 0;
            } else {
                weekday += 1;
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }
        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn month_navigation_wraps_at_year_boundaries() {
        let january = CalendarMonth { year: 2024, month: 1 };
        assert_eq!(january.prev(), CalendarMonth { year: 2023, month: 12 });
        let december = CalendarMonth { year: 2023, month: 12 };
        assert_eq!(december.next(), CalendarMonth { year: 2024, month: 1 });
    }

    #[test]
    fn weeks_lay_out_august_2023() {
        // 2023-08-01 is a Tuesday, 31 days.
        let weeks = CalendarMonth { year: 2023, month: 8 }.weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0], [None, None, Some(1), Some(2), Some(3), Some(4), Some(5)]);
        assert_eq!(
            weeks[4],
            [Some(27), Some(28), Some(29), Some(30), Some(31), None, None]
        );
    }

    #[test]
    fn weeks_handle_leap_february() {
        let weeks = CalendarMonth { year: 2024, month: 2 }.weeks();
        let days: Vec<u32> = weeks.iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.last(), Some(&29));
    }

    #[test]
    fn day_key_is_zero_padded() {
        let month = CalendarMonth { year: 2024, month: 3 };
        assert_eq!(month.day_key(7), "2024-03-07");
    }

    #[test]
    fn config_accepts_camel_case() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{"startYear": 2021, "endYear": 2024}"#)
                .expect("valid config json");
        assert_eq!(config.start_year, Some(2021));
        assert_eq!(config.end_year, Some(2024));
    }
}
