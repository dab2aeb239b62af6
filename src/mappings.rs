//! Name-Mapping Tables
//!
//! Static lookup tables translating react-native-svg component names and
//! camelCase prop names into the standard SVG vocabulary. Pure lookups,
//! no dispatch.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Namespace URI injected on every emitted `<svg>` root.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

lazy_static! {
    /// react-native-svg component name -> standard SVG element name.
    static ref COMPONENT_TO_TAG: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Svg", "svg");
        m.insert("Circle", "circle");
        m.insert("Ellipse", "ellipse");
        m.insert("G", "g");
        m.insert("Text", "text");
        m.insert("TSpan", "tspan");
        m.insert("TextPath", "textPath");
        m.insert("Path", "path");
        m.insert("Polygon", "polygon");
        m.insert("Polyline", "polyline");
        m.insert("Line", "line");
        m.insert("Rect", "rect");
        m.insert("Use", "use");
        m.insert("Image", "image");
        m.insert("Symbol", "symbol");
        m.insert("Defs", "defs");
        m.insert("LinearGradient", "linearGradient");
        m.insert("RadialGradient", "radialGradient");
        m.insert("Stop", "stop");
        m.insert("ClipPath", "clipPath");
        m.insert("Pattern", "pattern");
        m.insert("Mask", "mask");
        m.insert("Marker", "marker");
        m.insert("ForeignObject", "foreignObject");
        m
    };

    /// react-native-svg prop name -> standard SVG attribute name.
    /// Identity entries are kept so membership doubles as a "known prop" check.
    static ref PROP_TO_ATTR: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("fill", "fill");
        m.insert("stroke", "stroke");
        m.insert("strokeWidth", "stroke-width");
        m.insert("strokeLinecap", "stroke-linecap");
        m.insert("strokeLinejoin", "stroke-linejoin");
        m.insert("strokeDasharray", "stroke-dasharray");
        m.insert("strokeDashoffset", "stroke-dashoffset");
        m.insert("strokeMiterlimit", "stroke-miterlimit");
        m.insert("strokeOpacity", "stroke-opacity");
        m.insert("fillOpacity", "fill-opacity");
        m.insert("fillRule", "fill-rule");
        m.insert("clipRule", "clip-rule");
        m.insert("clipPath", "clip-path");
        m.insert("opacity", "opacity");
        m.insert("x", "x");
        m.insert("y", "y");
        m.insert("x1", "x1");
        m.insert("y1", "y1");
        m.insert("x2", "x2");
        m.insert("y2", "y2");
        m.insert("cx", "cx");
        m.insert("cy", "cy");
        m.insert("r", "r");
        m.insert("rx", "rx");
        m.insert("ry", "ry");
        m.insert("d", "d");
        m.insert("points", "points");
        m.insert("width", "width");
        m.insert("height", "height");
        m.insert("viewBox", "viewBox");
        m.insert("preserveAspectRatio", "preserveAspectRatio");
        m.insert("transform", "transform");
        m.insert("origin", "transform-origin");
        m.insert("href", "href");
        m.insert("xlinkHref", "xlink:href");
        m.insert("id", "id");
        m.insert("gradientUnits", "gradientUnits");
        m.insert("gradientTransform", "gradientTransform");
        m.insert("spreadMethod", "spreadMethod");
        m.insert("offset", "offset");
        m.insert("stopColor", "stop-color");
        m.insert("stopOpacity", "stop-opacity");
        m.insert("fontFamily", "font-family");
        m.insert("fontSize", "font-size");
        m.insert("fontWeight", "font-weight");
        m.insert("fontStyle", "font-style");
        m.insert("textAnchor", "text-anchor");
        m.insert("textDecoration", "text-decoration");
        m.insert("dominantBaseline", "dominant-baseline");
        m.insert("alignmentBaseline", "alignment-baseline");
        m.insert("dx", "dx");
        m.insert("dy", "dy");
        m.insert("rotate", "rotate");
        m.insert("lengthAdjust", "lengthAdjust");
        m.insert("textLength", "textLength");
        m.insert("startOffset", "startOffset");
        m.insert("method", "method");
        m.insert("spacing", "spacing");
        m.insert("markerStart", "marker-start");
        m.insert("markerMid", "marker-mid");
        m.insert("markerEnd", "marker-end");
        m.insert("markerWidth", "markerWidth");
        m.insert("markerHeight", "markerHeight");
        m.insert("refX", "refX");
        m.insert("refY", "refY");
        m.insert("orient", "orient");
        m.insert("markerUnits", "markerUnits");
        m.insert("patternUnits", "patternUnits");
        m.insert("patternContentUnits", "patternContentUnits");
        m.insert("patternTransform", "patternTransform");
        m.insert("maskUnits", "maskUnits");
        m.insert("maskContentUnits", "maskContentUnits");
        m
    };
}

/// Look up the SVG tag for a component name. `None` for unknown components.
pub fn svg_tag_for(component: &str) -> Option<&'static str> {
    COMPONENT_TO_TAG.get(component).copied()
}

/// Map a prop name to its SVG attribute name. Unknown names pass through.
pub fn svg_attr_for(prop: &str) -> String {
    PROP_TO_ATTR
        .get(prop)
        .map(|s| (*s).to_string())
        .unwrap_or_else(|| prop.to_string())
}

/// Iterate all component -> tag entries. Used by tests.
pub fn tag_entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    COMPONENT_TO_TAG.iter().map(|(k, v)| (*k, *v))
}
