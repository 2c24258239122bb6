pub mod policy;
pub mod runner;

pub use policy::{Disposition, ErrorPolicy};
pub use runner::{Mode, RunSummary, Runner, Source};
