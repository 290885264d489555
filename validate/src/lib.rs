//! CHASSIS Model Validation
//!
//! The validation pass forces every catalog to build, gathers the
//! structural violations recorded along the way, and adds the whole-model
//! checks no single build can see: orphaned support methods and missing
//! natures under strict mode. Resolution itself never aborts on a
//! structural problem; this pass is where they all surface together.

mod pass;
mod report;

pub use pass::*;
pub use report::*;
