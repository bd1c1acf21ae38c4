//! Shared primitives for the capturekit service.
//!
//! These are the values that cross crate boundaries: the structural facts
//! pulled from an interacted element, the locator candidates synthesized
//! from them, and the action records accumulated by a capture session.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier minted per capture run, used for log correlation only.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CaptureId(pub String);

impl CaptureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for CaptureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locator strategy enumeration.
///
/// Candidates are emitted in decreasing-specificity order; `Xpath` is the
/// last-resort strategy that is always available for an attached element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocatorKind {
    Id,
    Name,
    AriaLabel,
    Class,
    Xpath,
}

impl LocatorKind {
    /// Get the wire name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            LocatorKind::Id => "id",
            LocatorKind::Name => "name",
            LocatorKind::AriaLabel => "aria-label",
            LocatorKind::Class => "class",
            LocatorKind::Xpath => "xpath",
        }
    }
}

/// One synthesized locator for an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorCandidate {
    /// Strategy that produced the value.
    #[serde(rename = "type")]
    pub kind: LocatorKind,

    /// Selector or path expression, embedded verbatim (no escaping).
    pub value: String,
}

impl LocatorCandidate {
    pub fn new(kind: LocatorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Structural facts of a single interacted element.
///
/// Built fresh per interaction by the extractor, consumed once by the
/// synthesis engine, then discarded. `attributes` carries every attribute
/// present on the element so strategies added later see them too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    pub tag_name: String,
    #[serde(default)]
    pub id: String,
    /// Space-separated class token list, exactly as the element carries it.
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub aria_label: String,
    /// Text content with leading/trailing whitespace trimmed.
    #[serde(default)]
    pub text_content: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

/// Action metadata supplied by the instrumentation hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDetails {
    /// Interaction kind as reported by the hook ("click", "input", ...).
    pub kind: String,
    /// Entered value, when the interaction carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Page URL at the time of the interaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp_ms: u64,
}

impl ActionDetails {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
            page_url: None,
            timestamp_ms: 0,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = Some(url.into());
        self
    }

    pub fn with_timestamp_ms(mut self, ts: u64) -> Self {
        self.timestamp_ms = ts;
        self
    }
}

/// One captured interaction: the hook's metadata plus the locator set of
/// the target element. Append-only once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    pub action: ActionDetails,
    pub locators: Vec<LocatorCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_kind_names() {
        assert_eq!(LocatorKind::Id.name(), "id");
        assert_eq!(LocatorKind::AriaLabel.name(), "aria-label");
        assert_eq!(LocatorKind::Xpath.name(), "xpath");
    }

    #[test]
    fn candidate_serializes_with_type_field() {
        let candidate = LocatorCandidate::new(LocatorKind::AriaLabel, "[aria-label=\"Close\"]");
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["type"], "aria-label");
        assert_eq!(json["value"], "[aria-label=\"Close\"]");
    }

    #[test]
    fn snapshot_accepts_partial_payload() {
        let snapshot: ElementSnapshot = serde_json::from_value(serde_json::json!({
            "tagName": "BUTTON",
            "textContent": "Save",
        }))
        .unwrap();
        assert_eq!(snapshot.tag_name, "BUTTON");
        assert!(snapshot.id.is_empty());
        assert!(snapshot.attributes.is_empty());
    }

    #[test]
    fn action_record_round_trips() {
        let record = ActionRecord {
            action: ActionDetails::new("click")
                .with_page_url("https://example.com")
                .with_timestamp_ms(1_700_000_000_000),
            locators: vec![LocatorCandidate::new(LocatorKind::Id, "#save")],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["action"]["kind"], "click");
        assert_eq!(json["action"]["pageUrl"], "https://example.com");
        assert_eq!(json["locators"][0]["type"], "id");
        let back: ActionRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
