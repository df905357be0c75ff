//! Ilmo Validation Core
//!
//! Pure validation functions for the course-registration pipeline.
//! Every check is a function of its input plus an explicit "today" for
//! the date rules; nothing here reads the clock or keeps state between
//! calls.

pub mod date;
pub mod email;
pub mod name;
pub mod phone;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use name::*;
pub use phone::*;

#[cfg(feature = "garde")]
pub use garde_validators::*;
