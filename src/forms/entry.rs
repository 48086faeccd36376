use chrono::{DateTime, Utc};

use super::{FormField, RecordForm};
use crate::models::amount::Amount;
use crate::models::category::CategorySet;
use crate::models::entry::{Entry, RecordId};

const FIELDS: &[FormField] = &[FormField::Description, FormField::Amount, FormField::Category];

/// Form for the expense and income screens.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm<C: CategorySet> {
    visible: bool,
    description: String,
    amount: String,
    category: Option<C>,
}

impl<C: CategorySet> EntryForm<C> {
    pub fn new() -> Self {
        Self {
            visible: false,
            description: String::new(),
            amount: String::new(),
            category: None,
        }
    }

    pub fn set_description(&mut self, value: &str) {
        self.set_text(FormField::Description, value);
    }

    pub fn set_amount(&mut self, value: &str) {
        self.set_text(FormField::Amount, value);
    }
}

impl<C: CategorySet> Default for EntryForm<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CategorySet> RecordForm for EntryForm<C> {
    type Record = Entry<C>;
    type Category = C;

    fn fields(&self) -> &'static [FormField] {
        FIELDS
    }

    fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Description => &self.description,
            FormField::Amount => &self.amount,
            FormField::Category => self.category.map_or("", |c| c.as_str()),
            _ => "",
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Description => Some(&mut self.description),
            FormField::Amount => Some(&mut self.amount),
            _ => None,
        }
    }

    fn selected_category(&self) -> Option<C> {
        self.category
    }

    fn select_category(&mut self, category: C) {
        self.category = Some(category);
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.description.is_empty() {
            missing.push(FormField::Description);
        }
        if self.amount.is_empty() {
            missing.push(FormField::Amount);
        }
        if self.category.is_none() {
            missing.push(FormField::Category);
        }
        missing
    }

    fn build(&self, now: DateTime<Utc>) -> Option<Entry<C>> {
        if self.description.is_empty() || self.amount.is_empty() {
            return None;
        }
        let category = self.category?;
        Some(Entry::new(
            RecordId::from_timestamp(now),
            self.description.clone(),
            Amount::parse(&self.amount),
            category,
            now.date_naive(),
        ))
    }

    fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.category = None;
    }
}
