use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use super::amount::Amount;
use super::category::{CategorySet, ExpenseCategory, IncomeCategory};
use crate::utils::format::{format_date, format_money};

/// Opaque record identifier.
///
/// New records take the creation time in epoch milliseconds, so two records
/// created within the same millisecond share an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn from_timestamp(now: DateTime<Utc>) -> Self {
        RecordId(now.timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dated ledger line. Expenses and income share this shape and differ only
/// in their category set.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<C: CategorySet> {
    pub id: RecordId,
    pub description: String,
    pub amount: Amount,
    pub category: C,
    pub date: NaiveDate,
}

pub type Expense = Entry<ExpenseCategory>;
pub type Income = Entry<IncomeCategory>;

impl<C: CategorySet> Entry<C> {
    pub fn new(
        id: RecordId,
        description: impl Into<String>,
        amount: Amount,
        category: C,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category,
            date,
        }
    }

    pub fn to_list_item(&self, currency: &str, amount_color: Color) -> ListItem<'static> {
        ListItem::new(vec![
            Line::from(vec![
                Span::raw(format!("{:<32} ", self.description)),
                Span::styled(
                    format_money(currency, &self.amount),
                    Style::default().fg(amount_color),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("{:<32} ", self.category.as_str()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format_date(self.date), Style::default().fg(Color::DarkGray)),
            ]),
        ])
    }
}
