//! Input buffers behind the "add" forms.
//!
//! A form holds raw text until it is submitted. Submitting either builds a
//! record, prepends it to the screen's list and resets the form, or does
//! nothing at all when a required field is blank.

pub mod entry;
pub mod goal;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::models::category::CategorySet;
use crate::store::RecordList;

pub use entry::EntryForm;
pub use goal::GoalForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Title,
    Amount,
    TargetAmount,
    Deadline,
    Category,
}

impl FormField {
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Description => "Descrição",
            FormField::Title => "Título da Meta",
            FormField::Amount => "Valor",
            FormField::TargetAmount => "Valor Alvo",
            FormField::Deadline => "Data Limite (AAAA-MM-DD)",
            FormField::Category => "Categoria",
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Category)
    }
}

pub trait RecordForm {
    type Record;
    type Category: CategorySet;

    /// Fields in focus order.
    fn fields(&self) -> &'static [FormField];

    fn text(&self, field: FormField) -> &str;

    fn text_mut(&mut self, field: FormField) -> Option<&mut String>;

    fn selected_category(&self) -> Option<Self::Category>;

    fn select_category(&mut self, category: Self::Category);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Required fields that are still blank or unparseable.
    fn missing_fields(&self) -> Vec<FormField>;

    /// Builds a record from the current input, or `None` if a required field
    /// is missing.
    fn build(&self, now: DateTime<Utc>) -> Option<Self::Record>;

    fn clear(&mut self);

    fn toggle(&mut self) {
        let visible = !self.is_visible();
        self.set_visible(visible);
    }

    fn hide(&mut self) {
        self.set_visible(false);
    }

    fn set_text(&mut self, field: FormField, value: &str) {
        if let Some(text) = self.text_mut(field) {
            value.clone_into(text);
        }
    }

    fn select_category_at(&mut self, index: usize) {
        if let Some(category) = Self::Category::all().get(index) {
            self.select_category(*category);
        }
    }

    fn selected_category_index(&self) -> Option<usize> {
        let selected = self.selected_category()?;
        Self::Category::all().iter().position(|c| *c == selected)
    }

    /// Adds the record to the front of `list`, then clears and hides the
    /// form. Returns `false` and leaves everything untouched when a required
    /// field is missing.
    fn submit(&mut self, list: &mut RecordList<Self::Record>, now: DateTime<Utc>) -> bool {
        let Some(record) = self.build(now) else {
            debug!(missing = ?self.missing_fields(), "submit ignored");
            return false;
        };
        list.prepend(record);
        self.clear();
        self.hide();
        info!(records = list.len(), "record added");
        true
    }
}
