use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{FormField, RecordForm};
use crate::models::amount::Amount;
use crate::models::category::{CategorySet, GoalCategory};
use crate::models::entry::RecordId;
use crate::models::goal::{Deadline, Goal};

const FIELDS: &[FormField] = &[
    FormField::Title,
    FormField::TargetAmount,
    FormField::Deadline,
    FormField::Category,
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalForm {
    visible: bool,
    title: String,
    target_amount: String,
    deadline: String,
    category: Option<GoalCategory>,
}

impl GoalForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, value: &str) {
        self.set_text(FormField::Title, value);
    }

    pub fn set_target_amount(&mut self, value: &str) {
        self.set_text(FormField::TargetAmount, value);
    }

    pub fn set_deadline(&mut self, value: &str) {
        self.set_text(FormField::Deadline, value);
    }
}

impl RecordForm for GoalForm {
    type Record = Goal;
    type Category = GoalCategory;

    fn fields(&self) -> &'static [FormField] {
        FIELDS
    }

    fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::TargetAmount => &self.target_amount,
            FormField::Deadline => &self.deadline,
            FormField::Category => self.category.map_or("", |c| c.as_str()),
            _ => "",
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::TargetAmount => Some(&mut self.target_amount),
            FormField::Deadline => Some(&mut self.deadline),
            _ => None,
        }
    }

    fn selected_category(&self) -> Option<GoalCategory> {
        self.category
    }

    fn select_category(&mut self, category: GoalCategory) {
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
        if self.title.is_empty() {
            missing.push(FormField::Title);
        }
        if self.target_amount.is_empty() {
            missing.push(FormField::TargetAmount);
        }
        if self.deadline.is_empty() {
            missing.push(FormField::Deadline);
        }
        if self.category.is_none() {
            missing.push(FormField::Category);
        }
        missing
    }

    /// New goals start with nothing saved.
    fn build(&self, now: DateTime<Utc>) -> Option<Goal> {
        if self.title.is_empty() || self.target_amount.is_empty() || self.deadline.is_empty() {
            return None;
        }
        let category = self.category?;
        Some(Goal {
            id: RecordId::from_timestamp(now),
            title: self.title.clone(),
            target_amount: Amount::parse(&self.target_amount),
            current_amount: Amount::new(Decimal::ZERO),
            deadline: Deadline::parse(&self.deadline),
            category,
        })
    }

    fn clear(&mut self) {
        self.title.clear();
        self.target_amount.clear();
        self.deadline.clear();
        self.category = None;
    }
}
