pub mod output;
pub mod report;

pub use report::{dashboard_lines, Line};
