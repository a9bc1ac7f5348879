//! Size-bounded splitting of compiled documents along `## Phase` sections.
//!
//! An oversized document is indexed into phase sections, a contiguous suffix
//! of those sections is moved into satellite documents, and the main
//! document keeps a stub per satellite. Satellites link back to the main
//! document so a reader can navigate in both directions.

mod assembler;
mod engine;
mod indexer;
mod planner;
mod types;

pub use assembler::assemble;
pub use engine::SplitEngine;
pub use indexer::index_sections;
pub use planner::{plan_split, plan_split_with_overhead};
pub use types::{Section, SplitNaming, SplitPlan};
