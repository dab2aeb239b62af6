//! # react-native-svg Source Conversion Engine
//!
//! Turns JSX/TSX source text that builds vector graphics out of
//! `react-native-svg` components into standalone, renderable SVG documents.
//! The editor shell (preview panel, file watching, zoom controls) lives
//! outside this crate and only ever calls [`convert_source`].
//!
//! ## Invariants
//!
//! 1. **Best effort, never fatal**: malformed source, unknown components,
//!    and dynamic values degrade to diagnostics, lowercased tags, and
//!    omitted attributes respectively. The engine never panics on input.
//! 2. **Scoped defaults**: each function's parameter defaults are derived
//!    once and threaded by reference through that function's conversions
//!    only. No defaults scope survives the call or leaks to siblings, so
//!    concurrent callers need no synchronization.
//! 3. **Deterministic output**: identical source yields byte-identical
//!    documents and diagnostics. Attribute order follows source order, with
//!    `viewBox`/`xmlns` appended last on `svg` tags.
//! 4. **Failure scoping**: an unresolvable value drops one attribute; an
//!    unmappable tag drops one node; only unparseable source aborts the
//!    whole call.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod convert;
mod ir;
mod locate;
mod mappings;
mod serialize;

#[cfg(test)]
mod conversion_tests;

pub use convert::convert_element;
pub use ir::{ConversionResult, ParamDefaults, SvgAttribute, SvgChild, SvgNode};
pub use locate::{locate_roots, LocateResult};
pub use mappings::{svg_attr_for, svg_tag_for, SVG_NAMESPACE};
pub use serialize::{assemble_document, serialize_node};

/// Informational diagnostic returned when parsing succeeds but the source
/// contains no convertible graphic definition.
pub const NO_COMPONENTS_FOUND: &str = "No React Native SVG components found";

/// Convert one source document into an SVG document plus diagnostics.
///
/// This is the sole engine entry point. Exactly one of the following holds
/// for the returned [`ConversionResult`]:
/// - at least one root was found: `document` holds the serialized trees
///   joined by blank lines and `diagnostics` is empty;
/// - no root was found: `document` is empty, one informational diagnostic;
/// - parsing failed: `document` is empty, one `"Parse error: …"` diagnostic.
pub fn convert_source(source: &str) -> ConversionResult {
    let located = locate_roots(source);

    if located.roots.is_empty() {
        let diagnostics = if located.diagnostics.is_empty() {
            vec![NO_COMPONENTS_FOUND.to_string()]
        } else {
            located.diagnostics
        };
        return ConversionResult {
            document: String::new(),
            diagnostics,
        };
    }

    ConversionResult {
        document: assemble_document(&located.roots),
        diagnostics: located.diagnostics,
    }
}

#[cfg(feature = "napi")]
#[napi]
pub fn convert_source_native(code: String) -> napi::Result<serde_json::Value> {
    serde_json::to_value(convert_source(&code)).map_err(|e| napi::Error::from_reason(e.to_string()))
}
