pub mod format;
pub mod logging;
pub mod sample_data;
