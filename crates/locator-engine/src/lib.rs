//! Locator synthesis for captured interactions.
//!
//! Given a reference to an element inside a live page, this crate:
//! - extracts the element's structural facts in a single in-page
//!   evaluation ([`probe::ElementProbe::snapshot`]);
//! - walks its ancestor chain for the structural facts the XPath
//!   computation needs ([`probe::ElementProbe::ancestor_trail`]);
//! - synthesizes an ordered, decreasing-specificity set of locator
//!   candidates, with an XPath always last ([`strategies::synthesize`]).
//!
//! The page is only ever asked for raw facts; every locator value is
//! computed on this side of the boundary.

pub mod errors;
pub mod probe;
pub mod strategies;
pub mod xpath;

pub use errors::LocatorError;
pub use probe::{ElementProbe, ElementRef};
pub use strategies::{css_candidates, synthesize, synthesize_with_trail};
pub use xpath::{xpath_from_trail, TrailNode};
