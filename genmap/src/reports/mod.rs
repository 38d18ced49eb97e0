//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod ls;
mod manifest;
mod output;

pub use ls::{LsEntry, LsReport};
pub use manifest::ManifestReport;
pub use output::{Report, TerminalOutput};
