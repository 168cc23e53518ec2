pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{clock::FixedClock, clock::SystemClock, storage::LocalStorage, target::MemoryTarget};
pub use crate::core::{
    batch::BatchRunner,
    eligibility::compute_eligibility,
    handler::{FormHandler, SubmitEvent},
    render::OutputFormat,
};
pub use crate::domain::model::{Age, Eligibility, PassResult, PassSummary, ReportFormat, VisitorInput};
pub use crate::utils::error::{PassError, Result};
