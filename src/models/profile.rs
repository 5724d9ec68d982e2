use chrono::Local;
use serde::{Deserialize, Serialize};

/// A locally created identity owning one record set and one settings value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl Profile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: Local::now().to_rfc3339(),
        }
    }
}

/// Lowercase ASCII slug used as the base of a profile id.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = true;

    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}
