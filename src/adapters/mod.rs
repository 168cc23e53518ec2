// Adapters layer: concrete clocks, output targets and storage.

pub mod clock;
pub mod storage;
pub mod target;
