use std::fmt;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::amount::Amount;
use super::category::GoalCategory;
use super::entry::RecordId;

const DEADLINE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: RecordId,
    pub title: String,
    pub target_amount: Amount,
    pub current_amount: Amount,
    pub deadline: Deadline,
    pub category: GoalCategory,
}

/// A goal's deadline as typed into the form.
///
/// Text that is not a `YYYY-MM-DD` date is kept as is and shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deadline {
    Date(NaiveDate),
    Text(String),
}

impl Deadline {
    pub fn parse(text: &str) -> Self {
        match NaiveDate::parse_from_str(text.trim(), DEADLINE_FORMAT) {
            Ok(date) => Deadline::Date(date),
            Err(_) => Deadline::Text(text.to_string()),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Deadline::Date(date) => Some(*date),
            Deadline::Text(_) => None,
        }
    }
}

impl From<NaiveDate> for Deadline {
    fn from(date: NaiveDate) -> Self {
        Deadline::Date(date)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deadline::Date(date) => write!(f, "{}", date.format(DEADLINE_FORMAT)),
            Deadline::Text(text) => f.write_str(text),
        }
    }
}

impl Goal {
    pub fn progress(&self) -> Progress {
        Progress::of(self.current_amount, self.target_amount)
    }
}

/// How far `current` is towards `target`, as a percentage.
///
/// Overshooting the target is reported as is (above 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Percent(Decimal),
    /// Non-zero amount saved towards a zero target.
    Infinite,
    /// Zero over zero, or a non-numeric amount.
    Undefined,
}

impl Progress {
    pub fn of(current: Amount, target: Amount) -> Self {
        let (Some(current), Some(target)) = (current.value(), target.value()) else {
            return Progress::Undefined;
        };
        if target.is_zero() {
            return if current.is_zero() {
                Progress::Undefined
            } else {
                Progress::Infinite
            };
        }
        match current
            .checked_div(target)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        {
            Some(percent) => Progress::Percent(percent),
            None => Progress::Infinite,
        }
    }

    pub fn percent(&self) -> Option<Decimal> {
        match self {
            Progress::Percent(p) => Some(*p),
            _ => None,
        }
    }

    /// Percentage rounded to a whole number, half away from zero.
    pub fn rounded(&self) -> Option<Decimal> {
        self.percent()
            .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Filled cells out of `width` for a progress bar, clamped to the track.
    pub fn filled_cells(&self, width: u16) -> u16 {
        match self {
            Progress::Percent(p) => {
                if p.is_sign_negative() {
                    return 0;
                }
                let Some(scaled) = p.checked_mul(Decimal::from(width)) else {
                    return width;
                };
                let cells = (scaled / Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
                if cells >= Decimal::from(width) {
                    width
                } else {
                    cells.to_u16().unwrap_or(0)
                }
            }
            Progress::Infinite => width,
            Progress::Undefined => 0,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rounded() {
            Some(p) => write!(f, "{}%", p.normalize()),
            None if matches!(self, Progress::Infinite) => f.write_str("Infinity%"),
            None => f.write_str("NaN%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(n: i64) -> Amount {
        Amount::new(Decimal::from(n))
    }

    #[test]
    fn one_third_rounds_down() {
        let progress = Progress::of(amount(5000), amount(15000));
        assert_eq!(progress.to_string(), "33%");
    }

    #[test]
    fn three_quarters() {
        assert_eq!(Progress::of(amount(7500), amount(10000)).to_string(), "75%");
    }

    #[test]
    fn overshoot_is_not_clamped() {
        let progress = Progress::of(amount(20000), amount(15000));
        assert_eq!(progress.to_string(), "133%");
        assert!(progress.percent().unwrap() > Decimal::ONE_HUNDRED);
    }

    #[test]
    fn zero_target() {
        assert_eq!(Progress::of(amount(10), amount(0)), Progress::Infinite);
        assert_eq!(Progress::of(amount(0), amount(0)), Progress::Undefined);
        assert_eq!(Progress::of(amount(10), amount(0)).to_string(), "Infinity%");
        assert_eq!(Progress::of(amount(0), amount(0)).to_string(), "NaN%");
    }

    #[test]
    fn nan_target_is_undefined() {
        assert_eq!(Progress::of(amount(0), Amount::NotANumber), Progress::Undefined);
    }

    #[test]
    fn half_rounds_away_from_zero() {
        assert_eq!(Progress::of(amount(1), amount(200)).to_string(), "1%");
        assert_eq!(Progress::of(amount(0), amount(200)).to_string(), "0%");
    }

    #[test]
    fn bar_fill_is_clamped_to_width() {
        assert_eq!(Progress::of(amount(5000), amount(15000)).filled_cells(30), 10);
        assert_eq!(Progress::of(amount(20000), amount(15000)).filled_cells(30), 30);
        assert_eq!(Progress::Infinite.filled_cells(30), 30);
        assert_eq!(Progress::Undefined.filled_cells(30), 0);
        assert_eq!(Progress::of(amount(-5), amount(10)).filled_cells(30), 0);

        let huge = Amount::new(Decimal::from_i128_with_scale(10_i128.pow(26), 0));
        let huge = Progress::of(huge, amount(1));
        assert_eq!(huge.filled_cells(30), 30);
    }

    #[test]
    fn deadline_keeps_unparseable_text() {
        let date = Deadline::parse("2025-12-31");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2025, 12, 31));
        assert_eq!(date.to_string(), "2025-12-31");

        let text = Deadline::parse("31/12/2025");
        assert_eq!(text, Deadline::Text("31/12/2025".to_string()));
        assert_eq!(text.date(), None);
        assert_eq!(text.to_string(), "31/12/2025");
    }
}
