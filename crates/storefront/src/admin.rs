//! Form state and validation for the admin and checkout screens.
//!
//! Forms hold raw string field state exactly as typed. Validation happens
//! on submit; on failure the state is preserved so the user can correct it,
//! and on success it is reset to empty.

use thiserror::Error;

use mercadito_core::{Category, CustomerInfo, Money, ProductDraft};

/// Identifies one field of the admin product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Price,
    Description,
    Category,
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Description => "description",
            Self::Category => "category",
        };
        write!(f, "{name}")
    }
}

/// Validation failures for the admin product form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more mandatory fields are blank.
    #[error("missing required fields: {}", join_fields(.0))]
    MissingRequiredField(Vec<ProductField>),

    /// The price field does not parse as a number greater than zero.
    #[error("price must be a number greater than zero, got {0:?}")]
    InvalidPrice(String),

    /// The category is not one of the fixed labels.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}

fn join_fields(fields: &[ProductField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw field state of the admin "add product" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub category: String,
}

impl ProductForm {
    /// Validate the form into a [`ProductDraft`].
    ///
    /// Name, price, description, and category are mandatory; a blank image
    /// falls back to `placeholder_image`. The form itself is untouched -
    /// the caller resets it after the draft is accepted.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingRequiredField`] naming every blank mandatory
    /// field, [`FormError::InvalidPrice`] when the price does not parse as
    /// a positive number, or [`FormError::UnknownCategory`] when the
    /// category is not one of the fixed labels.
    pub fn validate(&self, placeholder_image: &str) -> Result<ProductDraft, FormError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(ProductField::Name);
        }
        if self.price.trim().is_empty() {
            missing.push(ProductField::Price);
        }
        if self.description.trim().is_empty() {
            missing.push(ProductField::Description);
        }
        if self.category.trim().is_empty() {
            missing.push(ProductField::Category);
        }
        if !missing.is_empty() {
            return Err(FormError::MissingRequiredField(missing));
        }

        let price: Money = self
            .price
            .parse()
            .map_err(|_| FormError::InvalidPrice(self.price.clone()))?;
        if !price.is_positive() {
            return Err(FormError::InvalidPrice(self.price.clone()));
        }

        let category: Category = self
            .category
            .parse()
            .map_err(|_| FormError::UnknownCategory(self.category.clone()))?;

        let image = if self.image.trim().is_empty() {
            placeholder_image.to_owned()
        } else {
            self.image.clone()
        };

        Ok(ProductDraft {
            name: self.name.trim().to_owned(),
            price,
            image,
            description: self.description.trim().to_owned(),
            category,
        })
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Raw field state of the checkout contact form.
///
/// Scoped to one checkout attempt; reset after a successful composition,
/// preserved on validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub customer: CustomerInfo,
}

impl CheckoutForm {
    /// Clear every field.
    pub fn reset(&mut self) {
        self.customer = CustomerInfo::default();
    }
}
