//! # Conformance-Check Core
//!
//! The protocol every check follows:
//! - a check reads an artifact through an [`ArtifactAccessor`], computes the
//!   complete canonical state and returns an [`Outcome`]
//! - the [`Executor`] runs checks in order, collects every non-conformance
//!   message and raises them as one report
//! - [`sections`] holds the deterministic merge and sort algorithms used to
//!   decide canonical content
//!
//! # Best Practices
//!
//! - Checks return values; the conformance signal only appears at the
//!   check/executor boundary ([`Outcome::into_result`])
//! - Defects are never captured by the executor

pub mod executor;
pub mod outcome;
pub mod sections;
pub mod traits;

pub use executor::Executor;
pub use outcome::Outcome;
pub use sections::{expected_section_content, merge_with_template, sort_list_sections};
pub use traits::{ArtifactAccessor, sync_artifact};
