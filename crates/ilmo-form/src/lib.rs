// Ilmo - course-registration form validation
// Field values in, accepted table row or rejected field out

pub mod error;
pub mod fields;
pub mod pipeline;
pub mod registration;
pub mod row;

// Re-export the pipeline surface
pub use error::ValidationError;
pub use fields::{FieldId, FieldValues};
pub use pipeline::{format_timestamp, validate, ValidationResult};
pub use registration::Registration;
pub use row::{RegistrationRow, TermsMark};

// Re-export the validated field types
pub use ilmo_form_types::{BirthDate, EmailAddress, FullName, PhoneNumber};
