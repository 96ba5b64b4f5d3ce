//! Product category labels.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a [`Category`] from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// The fixed set of categories a product can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Sports,
    Books,
    Toys,
    Beauty,
    #[default]
    Other,
}

impl Category {
    /// All categories, in the order the admin form offers them.
    pub const ALL: [Self; 8] = [
        Self::Electronics,
        Self::Clothing,
        Self::Home,
        Self::Sports,
        Self::Books,
        Self::Toys,
        Self::Beauty,
        Self::Other,
    ];

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Home => "Home",
            Self::Sports => "Sports",
            Self::Books => "Books",
            Self::Toys => "Toys",
            Self::Beauty => "Beauty",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electronics" => Ok(Self::Electronics),
            "clothing" => Ok(Self::Clothing),
            "home" => Ok(Self::Home),
            "sports" => Ok(Self::Sports),
            "books" => Ok(Self::Books),
            "toys" => Ok(Self::Toys),
            "beauty" => Ok(Self::Beauty),
            "other" => Ok(Self::Other),
            _ => Err(CategoryParseError(s.to_owned())),
        }
    }
}
