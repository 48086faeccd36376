use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::amount::Amount;

/// `R$ 350.50`: symbol, a space, then the amount with two decimals.
pub fn format_money(currency: &str, amount: &Amount) -> String {
    format!("{} {}", currency, amount.to_fixed(2))
}

/// Brazilian grouping for headline figures: `R$ 3.400,00`.
pub fn format_money_grouped(currency: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{} {}{},{}", currency, sign, int_grouped, frac_part)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Signed percentage with one decimal, e.g. `+2.5%`.
pub fn format_change(percent: Decimal) -> String {
    let sign = if percent.is_sign_positive() { "+" } else { "-" };
    let rounded = percent.abs().round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.1}%", sign, rounded)
}
