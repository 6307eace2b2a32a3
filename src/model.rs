/// Data structures for bookmark groups
use serde::{Deserialize, Serialize};

/// A single saved link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    pub url: String,
    pub name: String,
}

impl Bookmark {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Bookmark {
        Bookmark {
            url: url.into(),
            name: name.into(),
        }
    }
}

/// A named, ordered collection of bookmarks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Group {
        Group {
            name: name.into(),
            bookmarks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_creation() {
        let group = Group::new("Reading");

        assert_eq!(group.name, "Reading");
        assert!(group.bookmarks.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let mut group = Group::new("Rust");
        group
            .bookmarks
            .push(Bookmark::new("https://doc.rust-lang.org", "Docs"));

        let json = serde_json::to_value(&group).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Rust",
                "bookmarks": [{ "url": "https://doc.rust-lang.org", "name": "Docs" }]
            })
        );
    }

    #[test]
    fn test_missing_bookmarks_field_defaults_to_empty() {
        let group: Group = serde_json::from_str(r#"{"name":"Bare"}"#).unwrap();

        assert_eq!(group.name, "Bare");
        assert_eq!(group.bookmarks.len(), 0);
    }
}
