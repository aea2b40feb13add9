//! CLI-side orchestration and output

mod clean;
pub mod style;

pub use clean::run_clean;
