pub mod amount;
pub mod category;
pub mod dashboard;
pub mod entry;
pub mod goal;
pub mod notification;
pub mod settings;
