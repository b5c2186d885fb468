//! Filter fields and query string construction.
//!
//! The character API accepts five optional, combinable filters. A
//! [`FilterSet`] holds the raw value typed into each field; only values that
//! are non-empty after trimming end up in the query, always in the fixed
//! field order `name, status, species, type, gender`.
//!
//! # Examples
//!
//! ```
//! use citadel_core::filters::{FilterField, FilterSet};
//!
//! let filters = FilterSet::new()
//!     .with(FilterField::Name, " Rick Sanchez ")
//!     .with(FilterField::Status, "alive");
//!
//! assert_eq!(filters.to_query().unwrap(), "name=Rick%20Sanchez&status=alive");
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::FilterError;

/// Characters left unescaped in a query value, matching `encodeURIComponent`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// One of the filters understood by the character endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Status,
    Species,
    Type,
    Gender,
}

impl FilterField {
    /// All fields, in query order.
    pub const ALL: [FilterField; 5] = [
        FilterField::Name,
        FilterField::Status,
        FilterField::Species,
        FilterField::Type,
        FilterField::Gender,
    ];

    /// Query parameter name.
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Status => "status",
            FilterField::Species => "species",
            FilterField::Type => "type",
            FilterField::Gender => "gender",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::Status => "Status",
            FilterField::Species => "Species",
            FilterField::Type => "Type",
            FilterField::Gender => "Gender",
        }
    }

    /// Placeholder text for free-text fields.
    pub fn placeholder(self) -> &'static str {
        match self {
            FilterField::Name => "e.g. Rick",
            FilterField::Status => "Any status",
            FilterField::Species => "e.g. Human",
            FilterField::Type => "e.g. Parasite",
            FilterField::Gender => "Any gender",
        }
    }

    /// Values the API documents for this field.
    ///
    /// Empty for free-text fields. The UI renders a select box when this is
    /// non-empty; the collector itself accepts any string.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterField::Status => &["alive", "dead", "unknown"],
            FilterField::Gender => &["female", "male", "genderless", "unknown"],
            _ => &[],
        }
    }

    fn index(self) -> usize {
        match self {
            FilterField::Name => 0,
            FilterField::Status => 1,
            FilterField::Species => 2,
            FilterField::Type => 3,
            FilterField::Gender => 4,
        }
    }
}

/// Current value of every filter field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    values: [String; 5],
}

impl FilterSet {
    /// Creates a filter set with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Replaces the raw value of `field`.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Raw (untrimmed) value of `field`.
    pub fn get(&self, field: FilterField) -> &str {
        &self.values[field.index()]
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Fields that take part in the query, with trimmed values, in query order.
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> + '_ {
        FilterField::ALL
            .into_iter()
            .map(|field| (field, self.get(field).trim()))
            .filter(|(_, value)| !value.is_empty())
    }

    /// True when no field would take part in the query.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Builds `field=value&...` from the active fields.
    ///
    /// Returns [`FilterError::NoFiltersProvided`] when every field is empty so
    /// callers can short-circuit before touching the network.
    pub fn to_query(&self) -> Result<String, FilterError> {
        let params: Vec<String> = self
            .active()
            .map(|(field, value)| {
                format!("{}={}", field.key(), utf8_percent_encode(value, QUERY_VALUE))
            })
            .collect();

        if params.is_empty() {
            return Err(FilterError::NoFiltersProvided);
        }

        Ok(params.join("&"))
    }

    /// Builds `base?query` from the active fields.
    pub fn build_url(&self, base: &str) -> Result<String, FilterError> {
        let query = self.to_query()?;
        Ok(format!("{}?{}", base, query))
    }
}
