//! slipsense-classify: name-direction classification and result assembly.
//!
//! Takes the extracted fields, decides income vs expense from how well the
//! slip's names match the user, resolves the warning chain, and assembles
//! the final [`slipsense_core::SlipExtractionResult`].

pub mod classifier;
pub mod pipeline;
pub mod warnings;

pub use classifier::{Classification, classify};
pub use pipeline::interpret_slip;
pub use warnings::{WarningOutcome, resolve_warning};
