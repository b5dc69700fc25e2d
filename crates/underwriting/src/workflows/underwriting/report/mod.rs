mod summary;
pub mod views;

pub use summary::{render, SummaryReport, MISSING_INFORMATION};
pub use views::{SummaryStatus, SummaryView};
