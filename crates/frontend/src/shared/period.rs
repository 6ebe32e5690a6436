//! Default period tokens used to prefill the view inputs.
//!
//! Tokens are plain strings and are never validated client-side; the
//! backend is the authority on what a token means.

use chrono::{Datelike, NaiveDate};

/// `YYYY-MM` for the month containing `date`.
pub fn month_token(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// `YYYY-Qn` for the quarter containing `date`.
pub fn quarter_token(date: NaiveDate) -> String {
    format!("{:04}-Q{}", date.year(), (date.month() - 1) / 3 + 1)
}

/// `YYYY-Hn` for the half-year containing `date`.
pub fn halfyear_token(date: NaiveDate) -> String {
    let half = if date.month() <= 6 { 1 } else { 2 };
    format!("{:04}-H{}", date.year(), half)
}

/// `YYYY` for the year containing `date`.
pub fn year_token(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn month_tokens_are_zero_padded() {
        assert_eq!(month_token(date(2024, 7, 15)), "2024-07");
        assert_eq!(month_token(date(2024, 12, 1)), "2024-12");
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(quarter_token(date(2024, 1, 1)), "2024-Q1");
        assert_eq!(quarter_token(date(2024, 3, 31)), "2024-Q1");
        assert_eq!(quarter_token(date(2024, 4, 1)), "2024-Q2");
        assert_eq!(quarter_token(date(2024, 10, 1)), "2024-Q4");
    }

    #[test]
    fn halfyear_boundaries() {
        assert_eq!(halfyear_token(date(2024, 6, 30)), "2024-H1");
        assert_eq!(halfyear_token(date(2024, 7, 1)), "2024-H2");
    }

    #[test]
    fn year_token_is_the_year() {
        assert_eq!(year_token(date(2024, 2, 29)), "2024");
    }
}
