//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, CheckStats};
pub use generate::{GenerateReport, GenerationResult, PreviewFile};
pub use list::{GroupListing, ListReport, ListedEndpoint};
pub use output::{Output, Report, TerminalOutput};
