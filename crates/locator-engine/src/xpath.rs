//! From-scratch XPath computation over an ancestor trail.

use serde::{Deserialize, Serialize};

/// Structural facts of one element node on the leaf-to-root walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailNode {
    pub tag_name: String,
    #[serde(default)]
    pub id: String,
    /// Preceding element siblings sharing this node's tag name.
    #[serde(default)]
    pub preceding_same_tag: u32,
}

impl TrailNode {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            id: String::new(),
            preceding_same_tag: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_preceding_same_tag(mut self, count: u32) -> Self {
        self.preceding_same_tag = count;
        self
    }
}

/// Compute an XPath for the element whose ancestor trail (leaf-to-root,
/// element nodes only, target first) is given.
///
/// The walk short-circuits at the first id-bearing node — the target
/// itself or any ancestor — returning the absolute-and-short form
/// `//*[@id="..."]` and discarding everything accumulated below it.
/// Otherwise each node contributes its lower-cased tag name, suffixed
/// with a 1-based `[n]` index only when preceding same-tag siblings
/// exist (XPath's own default-to-first semantics). An empty trail has
/// no path.
pub fn xpath_from_trail(trail: &[TrailNode]) -> Option<String> {
    let mut segments: Vec<String> = Vec::new();

    for node in trail {
        if !node.id.is_empty() {
            return Some(format!("//*[@id=\"{}\"]", node.id));
        }

        let index = node.preceding_same_tag + 1;
        let mut segment = node.tag_name.to_ascii_lowercase();
        if index > 1 {
            segment.push_str(&format!("[{index}]"));
        }
        segments.push(segment);
    }

    if segments.is_empty() {
        return None;
    }

    // Collected leaf-to-root; the path reads root-to-leaf.
    segments.reverse();
    Some(format!("/{}", segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_id_short_circuits() {
        let trail = vec![
            TrailNode::new("BUTTON").with_id("save"),
            TrailNode::new("DIV"),
            TrailNode::new("BODY"),
            TrailNode::new("HTML"),
        ];
        assert_eq!(
            xpath_from_trail(&trail),
            Some("//*[@id=\"save\"]".to_string())
        );
    }

    #[test]
    fn nearest_ancestor_id_short_circuits() {
        let trail = vec![
            TrailNode::new("SPAN"),
            TrailNode::new("LI").with_preceding_same_tag(2),
            TrailNode::new("UL").with_id("menu"),
            TrailNode::new("BODY"),
            TrailNode::new("HTML"),
        ];
        assert_eq!(
            xpath_from_trail(&trail),
            Some("//*[@id=\"menu\"]".to_string())
        );
    }

    #[test]
    fn sibling_index_only_past_the_first() {
        // Second of three id-less <li> siblings.
        let second = vec![
            TrailNode::new("LI").with_preceding_same_tag(1),
            TrailNode::new("UL"),
            TrailNode::new("BODY"),
            TrailNode::new("HTML"),
        ];
        assert_eq!(
            xpath_from_trail(&second),
            Some("/html/body/ul/li[2]".to_string())
        );

        let first = vec![
            TrailNode::new("LI"),
            TrailNode::new("UL"),
            TrailNode::new("BODY"),
            TrailNode::new("HTML"),
        ];
        assert_eq!(
            xpath_from_trail(&first),
            Some("/html/body/ul/li".to_string())
        );
    }

    #[test]
    fn indexes_apply_at_every_level() {
        let trail = vec![
            TrailNode::new("TD").with_preceding_same_tag(3),
            TrailNode::new("TR").with_preceding_same_tag(1),
            TrailNode::new("TABLE"),
            TrailNode::new("BODY"),
            TrailNode::new("HTML"),
        ];
        assert_eq!(
            xpath_from_trail(&trail),
            Some("/html/body/table/tr[2]/td[4]".to_string())
        );
    }

    #[test]
    fn tags_are_lowercased() {
        let trail = vec![TrailNode::new("HTML")];
        assert_eq!(xpath_from_trail(&trail), Some("/html".to_string()));
    }

    #[test]
    fn empty_trail_has_no_path() {
        assert_eq!(xpath_from_trail(&[]), None);
    }

    #[test]
    fn id_values_pass_through_verbatim() {
        let trail = vec![TrailNode::new("DIV").with_id("a\"b")];
        assert_eq!(
            xpath_from_trail(&trail),
            Some("//*[@id=\"a\"b\"]".to_string())
        );
    }
}
