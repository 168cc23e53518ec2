pub mod batch;
pub mod eligibility;
pub mod extract;
pub mod handler;
pub mod qr;
pub mod render;

pub use crate::domain::model::{Age, Eligibility, PassResult, PassSummary, VisitorInput};
pub use crate::domain::ports::{BatchSettings, Clock, PassTarget, Storage};
pub use crate::utils::error::Result;
