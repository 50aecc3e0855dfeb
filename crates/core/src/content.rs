//! Draft content-piece model returned by the strategy service (PRD-31).
//!
//! One [`BlogPostContent`] exists per generated draft. The outline editor
//! (PRD-32) mutates these records field by field; they are dropped when the
//! wizard session ends.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Primary and secondary keyword lists. Order is significant and must be
/// preserved by every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keywords {
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
}

/// One section of an outline: an H2 heading and its ordered H3 subsections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub h2: String,
    #[serde(default)]
    pub h3: Vec<String>,
}

/// A structured outline: the H1 heading and its ordered sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineTree {
    pub h1: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One draft content piece as returned by the strategy service.
///
/// The `outline` list carries exactly one [`OutlineTree`] in practice; the
/// wire format is a list, so the invariant is checked via
/// [`BlogPostContent::outline_tree`] rather than assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostContent {
    pub content_id: String,
    pub content_type: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub keywords: Keywords,
    #[serde(default)]
    pub outline: Vec<OutlineTree>,
}

impl BlogPostContent {
    /// Borrow the single outline tree, validating the one-tree invariant.
    pub fn outline_tree(&self) -> Result<&OutlineTree, CoreError> {
        match self.outline.as_slice() {
            [tree] => Ok(tree),
            other => Err(CoreError::Validation(format!(
                "Content piece '{}' must carry exactly one outline tree, found {}",
                self.content_id,
                other.len()
            ))),
        }
    }

    /// Mutable variant of [`Self::outline_tree`].
    pub fn outline_tree_mut(&mut self) -> Result<&mut OutlineTree, CoreError> {
        let len = self.outline.len();
        match self.outline.as_mut_slice() {
            [tree] => Ok(tree),
            _ => Err(CoreError::Validation(format!(
                "Content piece '{}' must carry exactly one outline tree, found {len}",
                self.content_id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece_with_outlines(n: usize) -> BlogPostContent {
        BlogPostContent {
            content_id: "cp-1".to_string(),
            outline: vec![OutlineTree::default(); n],
            ..Default::default()
        }
    }

    #[test]
    fn single_outline_tree_is_accessible() {
        let piece = piece_with_outlines(1);
        assert!(piece.outline_tree().is_ok());
    }

    #[test]
    fn missing_outline_tree_is_invalid() {
        let piece = piece_with_outlines(0);
        assert!(piece.outline_tree().is_err());
    }

    #[test]
    fn multiple_outline_trees_are_invalid() {
        let mut piece = piece_with_outlines(2);
        assert!(piece.outline_tree().is_err());
        assert!(piece.outline_tree_mut().is_err());
    }

    #[test]
    fn deserializes_strategy_payload() {
        let json = serde_json::json!({
            "content_id": "cp-42",
            "content_type": "blog post",
            "title": "Benefits of Product X",
            "summary": "Why product X matters.",
            "keywords": { "primary": ["product x"], "secondary": ["benefits"] },
            "outline": [{
                "h1": "Benefits of Product X",
                "sections": [
                    { "h2": "Overview", "h3": ["What it is", "Who it is for"] }
                ]
            }]
        });
        let piece: BlogPostContent = serde_json::from_value(json).unwrap();
        assert_eq!(piece.keywords.primary, vec!["product x"]);
        assert_eq!(piece.outline_tree().unwrap().sections[0].h3.len(), 2);
    }
}
