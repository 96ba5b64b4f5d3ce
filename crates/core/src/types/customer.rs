//! Customer contact details collected at checkout.

use serde::{Deserialize, Serialize};

/// Shipping and contact details for one checkout attempt.
///
/// Fields are free-form strings; the checkout composer only requires that
/// the mandatory ones are non-blank. Nothing is persisted after the order
/// summary is composed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
}

/// Identifies one field of [`CustomerInfo`], used to report which required
/// fields are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerField {
    Name,
    Email,
    Phone,
    Address,
    City,
    ZipCode,
}

impl CustomerField {
    /// The fields a checkout cannot proceed without. Zip code is optional.
    pub const REQUIRED: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::City,
    ];
}

impl std::fmt::Display for CustomerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::ZipCode => "zip code",
        };
        write!(f, "{name}")
    }
}

impl CustomerInfo {
    /// The raw value of a field.
    #[must_use]
    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Email => &self.email,
            CustomerField::Phone => &self.phone,
            CustomerField::Address => &self.address,
            CustomerField::City => &self.city,
            CustomerField::ZipCode => &self.zip_code,
        }
    }

    /// Every required field that is empty or whitespace-only.
    #[must_use]
    pub fn missing_required_fields(&self) -> Vec<CustomerField> {
        CustomerField::REQUIRED
            .into_iter()
            .filter(|&field| self.field(field).trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete() -> CustomerInfo {
        CustomerInfo {
            name: "Ana García".to_owned(),
            email: "ana@example.com".to_owned(),
            phone: "555-0100".to_owned(),
            address: "Calle Mayor 1".to_owned(),
            city: "Madrid".to_owned(),
            zip_code: "28001".to_owned(),
        }
    }

    #[test]
    fn test_complete_info_has_no_missing_fields() {
        assert!(complete().missing_required_fields().is_empty());
    }

    #[test]
    fn test_zip_code_is_optional() {
        let mut info = complete();
        info.zip_code.clear();
        assert!(info.missing_required_fields().is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut info = complete();
        info.phone = "   ".to_owned();
        info.city = "\t".to_owned();
        assert_eq!(
            info.missing_required_fields(),
            vec![CustomerField::Phone, CustomerField::City]
        );
    }

    #[test]
    fn test_default_is_fully_missing() {
        let info = CustomerInfo::default();
        assert_eq!(
            info.missing_required_fields(),
            CustomerField::REQUIRED.to_vec()
        );
    }
}
