//! Category models
//!
//! Categories come in two kinds distinguished by where they live: built-in
//! names compiled into the binary, and custom names persisted per user.
//! Expenses only ever store the category *name*.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Built-in expense categories, in display order
pub const BUILTIN_CATEGORIES: &[&str] = &[
    "Venue",
    "Catering",
    "Photography",
    "Flowers",
    "Music",
    "Decorations",
    "Attire",
    "Transportation",
    "Invitations",
    "Other",
];

/// Category selected by default on a fresh expense form
pub const DEFAULT_CATEGORY: &str = "Venue";

/// Check whether a name is one of the built-in categories (case-insensitive)
pub fn is_builtin(name: &str) -> bool {
    let name = name.trim();
    BUILTIN_CATEGORIES
        .iter()
        .any(|builtin| builtin.eq_ignore_ascii_case(name))
}

/// Validation errors for custom categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// A user-defined category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCategory {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for CustomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validate a name for a new custom category
pub fn validate_category_name(name: &str) -> Result<(), CategoryValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > 50 {
        return Err(CategoryValidationError::NameTooLong(len));
    }

    Ok(())
}

/// One entry of the effective category list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChoice<'a> {
    Builtin(&'static str),
    Custom(&'a CustomCategory),
}

impl CategoryChoice<'_> {
    /// Name shown in the category picker
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(name) => name,
            Self::Custom(category) => &category.name,
        }
    }

    /// Whether this entry can be deleted
    pub fn is_deletable(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// The effective category list: built-ins first, then custom categories in
/// the order the store lists them
pub fn category_choices(custom: &[CustomCategory]) -> Vec<CategoryChoice<'_>> {
    BUILTIN_CATEGORIES
        .iter()
        .copied()
        .map(CategoryChoice::Builtin)
        .chain(custom.iter().map(CategoryChoice::Custom))
        .collect()
}

/// Names of the effective category list
pub fn category_names(custom: &[CustomCategory]) -> Vec<String> {
    category_choices(custom)
        .iter()
        .map(|choice| choice.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(name: &str) -> CustomCategory {
        CustomCategory {
            id: CategoryId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_builtins_first_then_custom_in_order() {
        let customs = vec![custom("Cake"), custom("Honeymoon")];
        let names = category_names(&customs);

        assert_eq!(names.len(), BUILTIN_CATEGORIES.len() + 2);
        assert_eq!(&names[..BUILTIN_CATEGORIES.len()], BUILTIN_CATEGORIES);
        assert_eq!(names[BUILTIN_CATEGORIES.len()], "Cake");
        assert_eq!(names[BUILTIN_CATEGORIES.len() + 1], "Honeymoon");
    }

    #[test]
    fn test_only_custom_choices_deletable() {
        let customs = vec![custom("Cake")];
        let choices = category_choices(&customs);
        assert!(!choices[0].is_deletable());
        assert!(choices.last().unwrap().is_deletable());
    }

    #[test]
    fn test_choices_compare_by_entry() {
        let customs = vec![custom("Cake")];
        let choices = category_choices(&customs);

        assert_eq!(choices[0], CategoryChoice::Builtin(BUILTIN_CATEGORIES[0]));
        assert_eq!(choices.last(), Some(&CategoryChoice::Custom(&customs[0])));
        assert_ne!(choices[0], *choices.last().unwrap());
    }

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin("Venue"));
        assert!(is_builtin(" flowers "));
        assert!(!is_builtin("Cake"));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_category_name("Cake").is_ok());
        assert_eq!(
            validate_category_name("  "),
            Err(CategoryValidationError::EmptyName)
        );
        assert!(matches!(
            validate_category_name(&"x".repeat(51)),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }
}
