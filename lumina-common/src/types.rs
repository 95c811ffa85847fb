//! Core domain types shared across Lumina crates
//!
//! The category enumeration is a closed set with bit-exact wire values.
//! Every boundary (form input, analyzer response, query parameter) parses
//! into these types rather than trusting free-form strings.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Photo classification category
///
/// Wire values are fixed: `Portraits`, `Landscapes`, `Events`, `Abstract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Portraits,
    Landscapes,
    Events,
    Abstract,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Portraits,
        Category::Landscapes,
        Category::Events,
        Category::Abstract,
    ];

    /// Wire/display string for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Portraits => "Portraits",
            Category::Landscapes => "Landscapes",
            Category::Events => "Events",
            Category::Abstract => "Abstract",
        }
    }

    /// Short hint shown under the category selector in the upload form
    pub fn hint(&self) -> &'static str {
        match self {
            Category::Portraits => "Focus on human subjects and expressions.",
            Category::Landscapes => "Capturing nature and outdoor environments.",
            Category::Events => "Weddings, concerts, and gatherings.",
            Category::Abstract => "Conceptual, shapes, and non-literal imagery.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Portraits" => Ok(Category::Portraits),
            "Landscapes" => Ok(Category::Landscapes),
            "Events" => Ok(Category::Events),
            "Abstract" => Ok(Category::Abstract),
            other => Err(Error::InvalidInput(format!("Unknown category: {}", other))),
        }
    }
}

/// Gallery filter: the `All` sentinel or one specific category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering, return the full gallery
    All,
    /// Only photos in this category
    Only(Category),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "All" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

/// A published portfolio photo
///
/// Created only by the upload workflow's publish step, immutable thereafter.
/// The `url` references session-scoped image bytes (`/photos/{id}`) for
/// uploads, or an external URL for the seed collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    /// Unique photo identifier
    pub id: Uuid,
    /// Where the image bytes are served from
    pub url: String,
    /// Photo title
    pub title: String,
    /// Short description (1-2 sentences)
    pub description: String,
    /// Classification category
    pub category: Category,
    /// When the photo was published
    pub date_added: DateTime<Utc>,
}

/// Metadata produced by one image analysis attempt
///
/// Transient: seeds the upload form and is never stored independently of the
/// photo it becomes. The `suggestedCategory` spelling matches the analyzer's
/// response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub title: String,
    pub description: String,
    #[serde(rename = "suggestedCategory")]
    pub suggested_category: Category,
}

/// Contact form subject, one of five fixed options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactSubject {
    #[serde(rename = "Portrait Session")]
    PortraitSession,
    #[serde(rename = "Event Coverage")]
    EventCoverage,
    #[serde(rename = "Print Purchase")]
    PrintPurchase,
    Collaboration,
    Other,
}

impl ContactSubject {
    /// All subjects in display order
    pub const ALL: [ContactSubject; 5] = [
        ContactSubject::PortraitSession,
        ContactSubject::EventCoverage,
        ContactSubject::PrintPurchase,
        ContactSubject::Collaboration,
        ContactSubject::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSubject::PortraitSession => "Portrait Session",
            ContactSubject::EventCoverage => "Event Coverage",
            ContactSubject::PrintPurchase => "Print Purchase",
            ContactSubject::Collaboration => "Collaboration",
            ContactSubject::Other => "Other",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactSubject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Portrait Session" => Ok(ContactSubject::PortraitSession),
            "Event Coverage" => Ok(ContactSubject::EventCoverage),
            "Print Purchase" => Ok(ContactSubject::PrintPurchase),
            "Collaboration" => Ok(ContactSubject::Collaboration),
            "Other" => Ok(ContactSubject::Other),
            other => Err(Error::InvalidInput(format!(
                "Unknown contact subject: {}",
                other
            ))),
        }
    }
}
