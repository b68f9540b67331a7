// Library root: exposes the report and pipeline modules so integration tests
// can drive a full run without spawning the binary.

pub mod pipeline;
pub mod report;
