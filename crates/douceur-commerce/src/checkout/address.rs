//! Shipping address and field validation.

use serde::{Deserialize, Serialize};

/// The fields of a shipping address, for per-field error display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    FullName,
    Email,
    Phone,
    Street,
    City,
}

impl AddressField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::FullName => "full_name",
            AddressField::Email => "email",
            AddressField::Phone => "phone",
            AddressField::Street => "street",
            AddressField::City => "city",
        }
    }
}

/// A cash-on-delivery shipping address.
///
/// Every field except `notes` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingAddress {
    /// Recipient name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// Optional delivery notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShippingAddress {
    /// Create an address with every required field.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
            street: street.into(),
            city: city.into(),
            notes: None,
        }
    }

    /// The fields that currently fail validation, in display order.
    pub fn invalid_fields(&self) -> Vec<AddressField> {
        let mut fields = Vec::new();
        if self.full_name.trim().is_empty() {
            fields.push(AddressField::FullName);
        }
        if !email_is_valid(&self.email) {
            fields.push(AddressField::Email);
        }
        if !phone_is_valid(&self.phone) {
            fields.push(AddressField::Phone);
        }
        if self.street.trim().is_empty() {
            fields.push(AddressField::Street);
        }
        if self.city.trim().is_empty() {
            fields.push(AddressField::City);
        }
        fields
    }

    /// Check if every field passes validation.
    pub fn is_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }
}

/// local@domain.tld with no whitespace: the bar is "rejects obviously
/// malformed input", not RFC 5321.
fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// At least 10 characters drawn from digits, spaces, and `+ - ( )`.
fn phone_is_valid(phone: &str) -> bool {
    let phone = phone.trim();
    phone.chars().count() >= 10
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
        && phone.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_address() -> ShippingAddress {
        ShippingAddress::new(
            "Amina Benali",
            "amina@example.com",
            "+212 6 12 34 56 78",
            "12 rue des Orangers",
            "Casablanca",
        )
    }

    #[test]
    fn test_valid_address() {
        assert!(valid_address().is_valid());
    }

    #[test]
    fn test_required_fields() {
        let mut address = valid_address();
        address.full_name = "   ".to_string();
        address.city = String::new();

        let fields = address.invalid_fields();
        assert_eq!(fields, vec![AddressField::FullName, AddressField::City]);
    }

    #[test]
    fn test_notes_are_optional() {
        let mut address = valid_address();
        address.notes = None;
        assert!(address.is_valid());
        address.notes = Some("sonnez deux fois".to_string());
        assert!(address.is_valid());
    }

    #[test]
    fn test_email_grammar() {
        assert!(email_is_valid("a@b.co"));
        assert!(!email_is_valid(""));
        assert!(!email_is_valid("no-at-sign"));
        assert!(!email_is_valid("@missing-local.com"));
        assert!(!email_is_valid("no-dot@domain"));
        assert!(!email_is_valid("two@@at.com"));
        assert!(!email_is_valid("spa ce@mail.com"));
        assert!(!email_is_valid("dot@.leading"));
    }

    #[test]
    fn test_phone_grammar() {
        assert!(phone_is_valid("0612345678"));
        assert!(phone_is_valid("+212 (6) 12-34-56-78"));
        assert!(!phone_is_valid("061234"));
        assert!(!phone_is_valid("phone: 0612345678"));
        assert!(!phone_is_valid("++++++++++"));
    }
}
