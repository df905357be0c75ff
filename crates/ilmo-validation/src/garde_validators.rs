//! Custom garde validators for the registration-form rules
//!
//! These wrap the core checks so forms built with `#[derive(garde::Validate)]`
//! can apply the same rules through `custom(...)` attributes.

use crate::name::is_valid_full_name;
use crate::phone::is_valid_finnish_phone;

/// Validator: full name of at least two words, letters only
///
/// # Example
///
/// ```ignore
/// use garde::Validate;
///
/// #[derive(Validate)]
/// struct SignupForm {
///     #[garde(custom(full_name))]
///     full_name: String,
/// }
/// ```
pub fn full_name(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if !is_valid_full_name(value) {
        return Err(garde::Error::new(
            "name must be at least two words of two or more letters",
        ));
    }

    Ok(())
}

/// Validator: Finnish phone number with the +358 prefix
///
/// # Example
///
/// ```ignore
/// #[derive(Validate)]
/// struct SignupForm {
///     #[garde(custom(finnish_phone))]
///     phone: String,
/// }
/// ```
pub fn finnish_phone(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if !is_valid_finnish_phone(value) {
        return Err(garde::Error::new("phone number must start with +358"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_validator() {
        assert!(full_name("Anna Virtanen", &()).is_ok());
        assert!(full_name("Åsa Öberg", &()).is_ok());

        assert!(full_name("Anna", &()).is_err());
        assert!(full_name("A B", &()).is_err());
        assert!(full_name("Anna V1rtanen", &()).is_err());
    }

    #[test]
    fn test_finnish_phone_validator() {
        assert!(finnish_phone("+358 40 1234567", &()).is_ok());

        assert!(finnish_phone("0401234567", &()).is_err());
        assert!(finnish_phone("+358", &()).is_err());
    }
}
