//! slipsense-extract: regex-driven field extractors over normalized slip text.
//!
//! Each field has its own ordered pattern catalog and its own selection
//! policy. Amounts and names pool matches across every pattern; date, time
//! and title stop at the first pattern that produces something valid. The
//! asymmetry is deliberate and must not be unified.

pub mod amount;
pub mod date;
pub mod names;
pub mod time;
pub mod title;

pub use amount::extract_amount;
pub use date::extract_date;
pub use names::extract_names;
pub use time::extract_time;
pub use title::extract_title;
