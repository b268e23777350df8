pub mod fill;
pub mod output;

pub use fill::{DayFillStats, FillReport, FillReportConfig, run_fill_report};
pub use output::{print_report, write_csv};
