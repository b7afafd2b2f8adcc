//! Directory entries and the fixed category enumeration.

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// CATEGORY
// =============================================================================

/// Helpline category tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Crisis,
    Lgbtq,
    Youth,
    Veterans,
    Specialized,
    General,
}

impl Category {
    /// Bucket for untagged or unrecognized entries.
    pub const DEFAULT: Self = Self::General;
    /// Expanded automatically the first time the grouped view is shown.
    pub const PRIORITY: Self = Self::Crisis;

    pub const ALL: [Self; 6] = [
        Self::Crisis,
        Self::Lgbtq,
        Self::Youth,
        Self::Veterans,
        Self::Specialized,
        Self::General,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crisis => "crisis",
            Self::Lgbtq => "lgbtq",
            Self::Youth => "youth",
            Self::Veterans => "veterans",
            Self::Specialized => "specialized",
            Self::General => "general",
        }
    }

    /// Parse a `data-category` tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownCategory(s.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation metadata for one category section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub category: Category,
    /// Translation key for the section title.
    pub name_key: &'static str,
    /// English title used when no translation is loaded.
    pub fallback_name: &'static str,
    /// Icon name rendered in the section header.
    pub icon: &'static str,
}

/// Section order for the grouped view.
pub const DEFAULT_CATEGORIES: [CategoryDescriptor; 6] = [
    CategoryDescriptor {
        category: Category::Crisis,
        name_key: "mobile_cat_crisis",
        fallback_name: "Crisis Lines",
        icon: "alert-circle",
    },
    CategoryDescriptor {
        category: Category::Lgbtq,
        name_key: "mobile_cat_lgbtq",
        fallback_name: "LGBTQ+ Support",
        icon: "heart-half",
    },
    CategoryDescriptor {
        category: Category::Youth,
        name_key: "mobile_cat_youth",
        fallback_name: "Youth & Students",
        icon: "school",
    },
    CategoryDescriptor {
        category: Category::Veterans,
        name_key: "mobile_cat_veterans",
        fallback_name: "Veterans",
        icon: "shield-checkmark",
    },
    CategoryDescriptor {
        category: Category::Specialized,
        name_key: "mobile_cat_specialized",
        fallback_name: "Specialized",
        icon: "medical",
    },
    CategoryDescriptor {
        category: Category::General,
        name_key: "mobile_cat_general",
        fallback_name: "General Support",
        icon: "call",
    },
];

// =============================================================================
// ENTRY
// =============================================================================

/// Stable entry identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One directory item. `fields` is presentational payload (name, phone,
/// description) that the view controller never interprets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Raw category tag as found in the page.
    pub category: String,
    /// Position in the canonical list; assigned by `CardStore::load`.
    #[serde(default)]
    pub display_order: usize,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Entry {
    #[must_use]
    pub fn new(id: impl Into<EntryId>, category: &str) -> Self {
        Self { id: id.into(), category: category.to_owned(), display_order: 0, fields: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The category this entry is grouped under.
    #[must_use]
    pub fn resolved_category(&self) -> Category {
        Category::parse(&self.category).unwrap_or(Category::DEFAULT)
    }
}
