use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use ts_rs::TS;

/// A calendar date on a profile, any part of which may be missing
/// (a birthday without the year, for instance). Components are stored as
/// given; no calendar check happens here.
#[skip_serializing_none]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema,
)]
pub struct ProfileDate {
    /// The year.
    #[ts(optional)]
    pub year: Option<i32>,
    /// The month, starting at 1 for January.
    #[ts(optional)]
    pub month: Option<u32>,
    /// The day of the month.
    #[ts(optional)]
    pub day: Option<u32>,
}

impl ProfileDate {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    /// The full date, if all three parts are known and name a real day.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }
}

impl From<NaiveDate> for ProfileDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: Some(date.year()),
            month: Some(date.month()),
            day: Some(date.day()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_date_has_no_naive_date() {
        let birthday = ProfileDate {
            month: Some(7),
            day: Some(14),
            ..Default::default()
        };

        assert!(!birthday.is_empty());
        assert!(birthday.to_naive_date().is_none());
    }

    #[test]
    fn illegal_calendar_day_is_stored_but_not_converted() {
        let date: ProfileDate = serde_json::from_str(r#"{"year":2023,"month":2,"day":31}"#).unwrap();

        assert_eq!(date.day, Some(31));
        assert!(date.to_naive_date().is_none());
    }

    #[test]
    fn complete_date_converts_both_ways() {
        let naive = NaiveDate::from_ymd_opt(1990, 3, 9).unwrap();
        let date = ProfileDate::from(naive);

        assert_eq!(date.year, Some(1990));
        assert_eq!(date.to_naive_date(), Some(naive));
    }

    #[test]
    fn numeric_strings_are_rejected() {
        assert!(serde_json::from_str::<ProfileDate>(r#"{"year":"1990"}"#).is_err());
    }
}
