//! Locator candidate synthesis.
//!
//! Strategies are applied independently and emitted in a fixed
//! decreasing-specificity order: id, name, aria-label, class, xpath.
//! An element may yield anywhere from one candidate (the xpath) to all
//! five, depending on which attributes it carries.

use capturekit_core_types::{ElementSnapshot, LocatorCandidate, LocatorKind};

use crate::errors::LocatorError;
use crate::probe::ElementProbe;
use crate::xpath::{xpath_from_trail, TrailNode};

/// Attribute-derived candidates (everything except the xpath), in order.
///
/// Values are embedded verbatim: an id containing CSS-significant
/// characters produces a literal `#<id>` selector, unescaped.
pub fn css_candidates(snapshot: &ElementSnapshot) -> Vec<LocatorCandidate> {
    let mut candidates = Vec::new();

    if !snapshot.id.is_empty() {
        candidates.push(LocatorCandidate::new(
            LocatorKind::Id,
            format!("#{}", snapshot.id),
        ));
    }
    if !snapshot.name.is_empty() {
        candidates.push(LocatorCandidate::new(
            LocatorKind::Name,
            format!("[name=\"{}\"]", snapshot.name),
        ));
    }
    if !snapshot.aria_label.is_empty() {
        candidates.push(LocatorCandidate::new(
            LocatorKind::AriaLabel,
            format!("[aria-label=\"{}\"]", snapshot.aria_label),
        ));
    }
    if !snapshot.class_name.is_empty() {
        // Split on single spaces only; the token list is taken as-is.
        let joined = snapshot.class_name.split(' ').collect::<Vec<_>>().join(".");
        candidates.push(LocatorCandidate::new(LocatorKind::Class, format!(".{joined}")));
    }

    candidates
}

/// Synthesize the full candidate set from a snapshot and a pre-fetched
/// ancestor trail. Pure; the async [`synthesize`] wraps it.
pub fn synthesize_with_trail(
    snapshot: &ElementSnapshot,
    trail: &[TrailNode],
) -> Vec<LocatorCandidate> {
    let mut candidates = css_candidates(snapshot);
    if let Some(xpath) = xpath_from_trail(trail) {
        candidates.push(LocatorCandidate::new(LocatorKind::Xpath, xpath));
    }
    candidates
}

/// Synthesize the ordered candidate set for the probed element.
///
/// Fetches the ancestor trail through the probe (one in-page round trip)
/// and appends the xpath candidate last. For an attached element the
/// trail is never empty, so an xpath is always present; a reference that
/// went stale between extraction and synthesis surfaces as
/// [`LocatorError::ElementNotFound`].
pub async fn synthesize(
    snapshot: &ElementSnapshot,
    probe: &ElementProbe<'_>,
) -> Result<Vec<LocatorCandidate>, LocatorError> {
    let trail = probe.ancestor_trail().await?;
    Ok(synthesize_with_trail(snapshot, &trail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot() -> ElementSnapshot {
        ElementSnapshot {
            tag_name: "BUTTON".to_string(),
            id: "save".to_string(),
            class_name: "btn primary".to_string(),
            name: "save-button".to_string(),
            aria_label: "Save document".to_string(),
            text_content: "Save".to_string(),
            attributes: Default::default(),
        }
    }

    fn body_trail() -> Vec<TrailNode> {
        vec![
            TrailNode::new("BUTTON"),
            TrailNode::new("BODY"),
            TrailNode::new("HTML"),
        ]
    }

    #[test]
    fn id_candidate_comes_first() {
        let candidates = synthesize_with_trail(&full_snapshot(), &body_trail());
        assert_eq!(candidates[0], LocatorCandidate::new(LocatorKind::Id, "#save"));
    }

    #[test]
    fn exactly_one_xpath_and_always_last() {
        let candidates = synthesize_with_trail(&full_snapshot(), &body_trail());
        let xpaths: Vec<_> = candidates
            .iter()
            .filter(|c| c.kind == LocatorKind::Xpath)
            .collect();
        assert_eq!(xpaths.len(), 1);
        assert_eq!(candidates.last().unwrap().kind, LocatorKind::Xpath);
    }

    #[test]
    fn fixed_order_with_all_attributes_present() {
        let kinds: Vec<_> = synthesize_with_trail(&full_snapshot(), &body_trail())
            .into_iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                LocatorKind::Id,
                LocatorKind::Name,
                LocatorKind::AriaLabel,
                LocatorKind::Class,
                LocatorKind::Xpath,
            ]
        );
    }

    #[test]
    fn class_tokens_join_with_dots() {
        let snapshot = ElementSnapshot {
            tag_name: "BUTTON".to_string(),
            class_name: "btn primary".to_string(),
            ..Default::default()
        };
        let candidates = css_candidates(&snapshot);
        assert_eq!(
            candidates,
            vec![LocatorCandidate::new(LocatorKind::Class, ".btn.primary")]
        );
    }

    #[test]
    fn bare_element_yields_only_xpath() {
        let snapshot = ElementSnapshot {
            tag_name: "DIV".to_string(),
            ..Default::default()
        };
        let candidates = synthesize_with_trail(
            &snapshot,
            &[
                TrailNode::new("DIV").with_preceding_same_tag(1),
                TrailNode::new("BODY"),
                TrailNode::new("HTML"),
            ],
        );
        assert_eq!(
            candidates,
            vec![LocatorCandidate::new(
                LocatorKind::Xpath,
                "/html/body/div[2]"
            )]
        );
    }

    #[test]
    fn name_and_aria_label_quote_values_verbatim() {
        let snapshot = ElementSnapshot {
            tag_name: "INPUT".to_string(),
            name: "q".to_string(),
            aria_label: "Search the site".to_string(),
            ..Default::default()
        };
        let candidates = css_candidates(&snapshot);
        assert_eq!(candidates[0].value, "[name=\"q\"]");
        assert_eq!(candidates[1].value, "[aria-label=\"Search the site\"]");
    }

    #[test]
    fn ancestor_id_flows_into_the_xpath_candidate() {
        let snapshot = ElementSnapshot {
            tag_name: "SPAN".to_string(),
            ..Default::default()
        };
        let trail = vec![
            TrailNode::new("SPAN"),
            TrailNode::new("DIV").with_id("toolbar"),
            TrailNode::new("BODY"),
            TrailNode::new("HTML"),
        ];
        let candidates = synthesize_with_trail(&snapshot, &trail);
        assert_eq!(candidates.last().unwrap().value, "//*[@id=\"toolbar\"]");
    }
}
