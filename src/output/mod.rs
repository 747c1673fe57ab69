pub mod formatter;

pub use formatter::{format_breakdown, format_result, format_risk, should_use_colors};
