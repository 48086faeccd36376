pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use error::{FinanceError, Result};
pub use forms::{EntryForm, GoalForm, RecordForm};
pub use models::amount::Amount;
pub use models::category::{CategorySet, ExpenseCategory, GoalCategory, IncomeCategory};
pub use models::entry::{Entry, Expense, Income, RecordId};
pub use models::goal::{Deadline, Goal, Progress};
pub use models::notification::{Notification, NotificationKind};
pub use store::RecordList;
pub use ui::{app::App, run_app};
