use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a course in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u32);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable course as served by the lessons API or the bundled dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    #[serde(default)]
    pub name: Option<String>,
    pub price: f64,
    pub image_url: String,
    /// Remaining places, older payloads call this `spaces`
    #[serde(alias = "spaces")]
    pub stock: u32,
    pub location: String,
    #[serde(default)]
    pub description: String,
}

impl Course {
    /// Name shown in views, courses without a name get a placeholder
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled course")
    }
}

/// Formats a price for display
pub fn format_price(price: f64) -> String {
    format!("£{:.2}", price)
}
