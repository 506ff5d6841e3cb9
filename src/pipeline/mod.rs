// src/pipeline/mod.rs

//! Poll/notify pipeline stages.
//!
//! - `validate`: structural checks on the decoded API payload
//! - `format`: per-record notification rendering
//! - `cycle`: one fetch–validate–format–deliver pass
//! - `supervisor`: the retrying loop around the cycle

pub mod cycle;
pub mod format;
pub mod supervisor;
pub mod validate;

pub use cycle::run_cycle;
pub use format::parse_status;
pub use supervisor::run_forever;
pub use validate::check_response;
