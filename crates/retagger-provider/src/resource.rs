//! Resource descriptors and listing pages.

use serde::{Deserialize, Serialize};

/// A resource yielded by an enumerator.
///
/// `id` is whatever the service's tagging API takes (ARN, name, or opaque
/// ID) and is never empty; `natural_keys` are the human-meaningful names the
/// reconciliation engine matches policy rules against. A descriptor lives
/// for one enumeration step only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Identifier passed to the tagging API.
    pub id: String,

    /// Names the reconciliation engine matches rules against.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub natural_keys: Vec<String>,
}

impl ResourceDescriptor {
    /// Create a descriptor with no natural keys.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            natural_keys: Vec::new(),
        }
    }

    /// Append one natural key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.natural_keys.push(key.into());
        self
    }

    /// Append several natural keys.
    #[must_use]
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.natural_keys.extend(keys.into_iter().map(Into::into));
        self
    }
}

/// One page of enumerated resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePage {
    /// Resources on this page, in the order the service reported them.
    pub resources: Vec<ResourceDescriptor>,

    /// Opaque cursor for the next page; `None` on the final page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl ResourcePage {
    /// Create a final page (no continuation).
    pub fn new(resources: Vec<ResourceDescriptor>) -> Self {
        Self {
            resources,
            next_cursor: None,
        }
    }

    /// Set the continuation cursor.
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.next_cursor = Some(cursor.into());
        self
    }

    /// Check whether this is the final page.
    pub fn is_final(&self) -> bool {
        self.next_cursor.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let descriptor = ResourceDescriptor::new("arn:aws:rds:us-east-1:123456789012:db:prod")
            .with_key("prod")
            .with_keys(vec!["prod-replica"]);
        assert_eq!(descriptor.id, "arn:aws:rds:us-east-1:123456789012:db:prod");
        assert_eq!(descriptor.natural_keys, vec!["prod", "prod-replica"]);
    }

    #[test]
    fn test_page_continuation() {
        let page = ResourcePage::new(vec![ResourceDescriptor::new("a")]);
        assert!(page.is_final());

        let page = page.with_cursor("token-1");
        assert!(!page.is_final());
        assert_eq!(page.next_cursor.as_deref(), Some("token-1"));
    }
}
