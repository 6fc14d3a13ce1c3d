pub mod aggregate;
pub mod exec;
pub mod output;
pub mod report;

pub use aggregate::UserStats;
pub use exec::exec;
pub use output::{JsonReporter, NdjsonReporter, Reporter, Section, TextReporter};
pub use report::report;
