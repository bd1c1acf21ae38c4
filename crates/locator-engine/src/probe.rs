//! Element snapshot extraction through in-page evaluation.

use browser_adapter::PageHandle;
use capturekit_core_types::ElementSnapshot;
use serde_json::Value;
use tracing::debug;

use crate::errors::LocatorError;
use crate::xpath::TrailNode;

/// An in-page JavaScript expression that resolves to the interacted
/// element. The instrumentation hook stashes element references on the
/// page and hands the core an expression that resolves them; probe
/// scripts embed it verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementRef(String);

impl ElementRef {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    /// Reference an element by CSS selector.
    pub fn css(selector: &str) -> Self {
        let literal = serde_json::to_string(selector).unwrap_or_else(|_| "\"\"".to_string());
        Self(format!("document.querySelector({literal})"))
    }

    pub fn expression(&self) -> &str {
        &self.0
    }
}

/// Reads structural facts of one element out of a live page.
///
/// Each method is a single suspension point: one script, one round trip.
/// A stale reference (detached or unresolvable element) yields
/// [`LocatorError::ElementNotFound`].
pub struct ElementProbe<'a> {
    page: &'a dyn PageHandle,
    target: &'a ElementRef,
}

impl<'a> ElementProbe<'a> {
    pub fn new(page: &'a dyn PageHandle, target: &'a ElementRef) -> Self {
        Self { page, target }
    }

    /// Pull the element's own facts: tag, id, classes, name, aria-label,
    /// trimmed text, and the full attribute map (read generically so
    /// unanticipated attributes survive for future strategies).
    pub async fn snapshot(&self) -> Result<ElementSnapshot, LocatorError> {
        let value = self.evaluate_guarded(&self.snapshot_script()).await?;
        serde_json::from_value(value).map_err(|err| LocatorError::Malformed(err.to_string()))
    }

    /// Walk the ancestor chain leaf-to-root, one [`TrailNode`] per element
    /// node. Text and comment nodes participate in neither the walk nor
    /// the sibling counts.
    pub async fn ancestor_trail(&self) -> Result<Vec<TrailNode>, LocatorError> {
        let value = self.evaluate_guarded(&self.trail_script()).await?;
        serde_json::from_value(value).map_err(|err| LocatorError::Malformed(err.to_string()))
    }

    async fn evaluate_guarded(&self, script: &str) -> Result<Value, LocatorError> {
        let value = self.page.evaluate(script).await?;
        if value.is_null() {
            debug!(
                target: "locator-engine",
                expression = self.target.expression(),
                "element reference did not resolve"
            );
            return Err(LocatorError::ElementNotFound(
                self.target.expression().to_string(),
            ));
        }
        Ok(value)
    }

    fn snapshot_script(&self) -> String {
        format!(
            r#"(() => {{
    const el = {target};
    if (!el || el.nodeType !== 1 || !el.isConnected) return null;
    const attributes = {{}};
    for (const attr of el.attributes) {{
        attributes[attr.name] = attr.value;
    }}
    return {{
        tagName: el.tagName,
        id: el.id || '',
        className: typeof el.className === 'string' ? el.className : '',
        name: el.name || '',
        ariaLabel: el.getAttribute('aria-label') || '',
        textContent: (el.textContent || '').trim(),
        attributes,
    }};
}})()"#,
            target = self.target.expression()
        )
    }

    fn trail_script(&self) -> String {
        format!(
            r#"(() => {{
    const el = {target};
    if (!el || el.nodeType !== 1 || !el.isConnected) return null;
    const trail = [];
    let node = el;
    while (node && node.nodeType === 1) {{
        let preceding = 0;
        let sibling = node.previousSibling;
        while (sibling) {{
            if (sibling.nodeType === 1 && sibling.tagName === node.tagName) {{
                preceding++;
            }}
            sibling = sibling.previousSibling;
        }}
        trail.push({{ tagName: node.tagName, id: node.id || '', precedingSameTag: preceding }});
        node = node.parentNode;
    }}
    return trail;
}})()"#,
            target = self.target.expression()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_ref_escapes_selector() {
        let target = ElementRef::css("button[name=\"save\"]");
        assert_eq!(
            target.expression(),
            "document.querySelector(\"button[name=\\\"save\\\"]\")"
        );
    }

    #[test]
    fn scripts_embed_the_target_expression() {
        let target = ElementRef::new("window.__captured[3]");
        let page = NullPage;
        let probe = ElementProbe::new(&page, &target);
        assert!(probe.snapshot_script().contains("window.__captured[3]"));
        assert!(probe.trail_script().contains("window.__captured[3]"));
        assert!(probe.trail_script().contains("precedingSameTag"));
    }

    struct NullPage;

    #[async_trait::async_trait]
    impl PageHandle for NullPage {
        async fn goto(&self, _url: &str) -> Result<(), browser_adapter::AdapterError> {
            Ok(())
        }

        async fn evaluate(
            &self,
            _expression: &str,
        ) -> Result<Value, browser_adapter::AdapterError> {
            Ok(Value::Null)
        }
    }

    #[tokio::test]
    async fn null_result_is_element_not_found() {
        let target = ElementRef::css("#gone");
        let page = NullPage;
        let probe = ElementProbe::new(&page, &target);
        let err = probe.snapshot().await.unwrap_err();
        assert!(matches!(err, LocatorError::ElementNotFound(_)));
        assert!(err.is_element_local());
    }
}
