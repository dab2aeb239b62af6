//! JSX-to-SVG Translation
//!
//! Converts one discovered JSX element (and its descendants) into an
//! [`SvgNode`] tree. Translation is best-effort by design:
//!
//! 1. **Tags**: mapped through the component table; unknown identifiers fall
//!    back to their lower-cased literal name; unmappable names drop the node.
//! 2. **Attributes**: names mapped through the prop table; values resolved
//!    through an explicit [`PropValue`] classification. An unresolvable
//!    value omits that attribute only — never the element, never the call.
//! 3. **Roots**: `svg`-tagged nodes get a synthesized `viewBox` (when absent)
//!    and the SVG namespace declaration appended after all user attributes.

use oxc_ast::ast::*;

use crate::ir::{ParamDefaults, SvgChild, SvgNode};
use crate::mappings::{svg_attr_for, svg_tag_for, SVG_NAMESPACE};

/// Classification of a single attribute value expression. Each variant is an
/// explicit fallback branch; `Unsupported` means the attribute is omitted.
#[derive(Debug, Clone, PartialEq)]
enum PropValue {
    /// String/numeric literal or expressionless template text.
    Literal(String),
    /// Bare identifier, resolved against the current parameter defaults.
    Variable(String),
    /// Member-access chain (`colors.primary`), outermost object first.
    MemberPath(Vec<String>),
    /// Array of literals, joined with spaces (dash patterns and the like).
    List(Vec<String>),
    /// Dynamic or unrecognized expression.
    Unsupported,
}

/// Peel parenthesized wrappers; the parser preserves them around arrow
/// bodies and attribute expressions.
pub fn strip_parens<'b, 'a>(mut expr: &'b Expression<'a>) -> &'b Expression<'a> {
    while let Expression::ParenthesizedExpression(paren) = expr {
        expr = &paren.expression;
    }
    expr
}

/// Stringify a numeric or string literal expression, if it is one.
pub fn literal_to_string(expr: &Expression) -> Option<String> {
    match strip_parens(expr) {
        Expression::StringLiteral(s) => Some(s.value.to_string()),
        Expression::NumericLiteral(n) => Some(format_number(n.value)),
        _ => None,
    }
}

/// Canonical decimal form, matching JS `String(number)` for literal inputs.
fn format_number(value: f64) -> String {
    value.to_string()
}

/// Convert a JSX element into an [`SvgNode`] tree.
///
/// Returns `None` only when no tag name can be derived; attribute and child
/// failures are resolved locally by omission.
pub fn convert_element<'a>(
    element: &JSXElement<'a>,
    defaults: &ParamDefaults,
) -> Option<SvgNode> {
    let tag = resolve_tag(&element.opening_element.name)?;
    let mut node = SvgNode::new(tag);

    for item in &element.opening_element.attributes {
        let JSXAttributeItem::Attribute(attr) = item else {
            // Spread attributes carry no statically known props.
            continue;
        };
        let JSXAttributeName::Identifier(name) = &attr.name else {
            continue;
        };
        let attr_name = svg_attr_for(name.name.as_str());
        if let Some(value) = resolve_attribute_value(attr.value.as_ref(), defaults) {
            node.set_attr(attr_name, value);
        }
    }

    if node.tag == "svg" {
        finalize_root_attributes(&mut node);
    }

    for child in &element.children {
        match child {
            JSXChild::Element(el) => {
                if let Some(converted) = convert_element(el, defaults) {
                    node.children.push(SvgChild::Element(converted));
                }
            }
            JSXChild::Text(text) => {
                let trimmed = text.value.trim();
                if !trimmed.is_empty() {
                    node.children.push(SvgChild::Text(trimmed.to_string()));
                }
            }
            JSXChild::ExpressionContainer(container) => {
                // Only literal expression children are honored; identifiers
                // are NOT resolved against defaults here, unlike attributes.
                if let Some(expr) = container.expression.as_expression() {
                    if let Some(text) = literal_to_string(expr) {
                        node.children.push(SvgChild::Text(text));
                    }
                }
            }
            // Fragments and child spreads have no static SVG equivalent.
            JSXChild::Fragment(_) | JSXChild::Spread(_) => {}
        }
    }

    Some(node)
}

/// Resolve a JSX element name to an SVG tag.
fn resolve_tag(name: &JSXElementName) -> Option<String> {
    match name {
        JSXElementName::Identifier(id) => Some(identifier_tag(id.name.as_str())),
        JSXElementName::IdentifierReference(id) => Some(identifier_tag(id.name.as_str())),
        // Qualified form like `Svg.Circle`: resolve the member name against
        // the table; unmapped members drop the node.
        JSXElementName::MemberExpression(member) => {
            svg_tag_for(member.property.name.as_str()).map(|tag| tag.to_string())
        }
        JSXElementName::NamespacedName(_) | JSXElementName::ThisExpression(_) => None,
    }
}

fn identifier_tag(name: &str) -> String {
    svg_tag_for(name)
        .map(|tag| tag.to_string())
        .unwrap_or_else(|| name.to_lowercase())
}

/// Synthesize `viewBox` (when absent) and force the namespace declaration
/// onto a root node, after all user attributes.
fn finalize_root_attributes(node: &mut SvgNode) {
    if node.attr("viewBox").is_none() {
        let width = parse_numeric(node.attr("width").unwrap_or("100"));
        let height = parse_numeric(node.attr("height").unwrap_or("100"));
        node.set_attr_last("viewBox", format!("0 0 {} {}", width, height));
    }
    node.set_attr_last("xmlns", SVG_NAMESPACE);
}

/// Resolve one attribute's source value to a string, or `None` to omit it.
fn resolve_attribute_value(
    value: Option<&JSXAttributeValue>,
    defaults: &ParamDefaults,
) -> Option<String> {
    let Some(value) = value else {
        // Bare attribute, e.g. `<Svg focusable>`.
        return Some("true".to_string());
    };

    match value {
        JSXAttributeValue::StringLiteral(s) => Some(s.value.to_string()),
        JSXAttributeValue::ExpressionContainer(container) => {
            let expr = container.expression.as_expression()?;
            match classify_value(strip_parens(expr)) {
                PropValue::Literal(text) => Some(text),
                PropValue::Variable(name) => Some(match defaults.get(&name) {
                    Some(resolved) => resolved.clone(),
                    None => format!("var(--{})", name),
                }),
                PropValue::MemberPath(parts) => Some(format!("var(--{})", parts.join("-"))),
                PropValue::List(items) => Some(items.join(" ")),
                PropValue::Unsupported => None,
            }
        }
        // Element- and fragment-valued attributes have no SVG rendering.
        JSXAttributeValue::Element(_) | JSXAttributeValue::Fragment(_) => None,
    }
}

fn classify_value(expr: &Expression) -> PropValue {
    match expr {
        Expression::StringLiteral(s) => PropValue::Literal(s.value.to_string()),
        Expression::NumericLiteral(n) => PropValue::Literal(format_number(n.value)),
        Expression::TemplateLiteral(template) => {
            // Only template text with no interpolations is static.
            if template.expressions.is_empty() && template.quasis.len() == 1 {
                PropValue::Literal(template.quasis[0].value.raw.to_string())
            } else {
                PropValue::Unsupported
            }
        }
        Expression::Identifier(id) => PropValue::Variable(id.name.to_string()),
        Expression::StaticMemberExpression(_) | Expression::ComputedMemberExpression(_) => {
            let parts = flatten_member_chain(expr);
            if parts.is_empty() {
                PropValue::Unsupported
            } else {
                PropValue::MemberPath(parts)
            }
        }
        Expression::ArrayExpression(array) => classify_array(array),
        _ => PropValue::Unsupported,
    }
}

/// Flatten `a.b.c` into `["a", "b", "c"]`. Computed segments contribute no
/// name; a non-identifier base is simply skipped.
fn flatten_member_chain(expr: &Expression) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = expr;

    loop {
        match current {
            Expression::StaticMemberExpression(member) => {
                parts.insert(0, member.property.name.to_string());
                current = &member.object;
            }
            Expression::ComputedMemberExpression(member) => {
                current = &member.object;
            }
            Expression::Identifier(id) => {
                parts.insert(0, id.name.to_string());
                break;
            }
            _ => break,
        }
    }

    parts
}

/// Arrays resolve only when every element is a literal; anything dynamic
/// makes the whole attribute unresolvable rather than partially emitted.
fn classify_array(array: &ArrayExpression) -> PropValue {
    if array.elements.is_empty() {
        return PropValue::Unsupported;
    }

    let mut items = Vec::with_capacity(array.elements.len());
    for element in &array.elements {
        match element {
            ArrayExpressionElement::StringLiteral(s) => items.push(s.value.to_string()),
            ArrayExpressionElement::NumericLiteral(n) => items.push(format_number(n.value)),
            _ => return PropValue::Unsupported,
        }
    }

    PropValue::List(items)
}

/// `parseFloat`-style leading-number parse; non-numeric input defaults to
/// the 100-unit viewport dimension.
fn parse_numeric(value: &str) -> f64 {
    let trimmed = value.trim();
    (1..=trimmed.len())
        .rev()
        .filter_map(|end| trimmed.get(..end))
        .find_map(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_is_canonical() {
        assert_eq!(format_number(24.0), "24");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_parse_numeric_prefixes() {
        assert_eq!(parse_numeric("200"), 200.0);
        assert_eq!(parse_numeric("24.5px"), 24.5);
        assert_eq!(parse_numeric("100%"), 100.0);
        assert_eq!(parse_numeric("auto"), 100.0);
        assert_eq!(parse_numeric(""), 100.0);
    }

    #[test]
    fn test_root_attribute_finalization() {
        let mut node = SvgNode::new("svg");
        node.set_attr("width", "200");
        node.set_attr("height", "100");
        finalize_root_attributes(&mut node);

        assert_eq!(node.attr("viewBox"), Some("0 0 200 100"));
        assert_eq!(node.attributes.last().map(|a| a.name.as_str()), Some("xmlns"));
        assert_eq!(node.attr("xmlns"), Some(SVG_NAMESPACE));
    }

    #[test]
    fn test_root_finalization_defaults_dimensions() {
        let mut node = SvgNode::new("svg");
        finalize_root_attributes(&mut node);
        assert_eq!(node.attr("viewBox"), Some("0 0 100 100"));
    }

    #[test]
    fn test_existing_view_box_kept() {
        let mut node = SvgNode::new("svg");
        node.set_attr("viewBox", "0 0 24 24");
        node.set_attr("width", "48");
        finalize_root_attributes(&mut node);
        assert_eq!(node.attr("viewBox"), Some("0 0 24 24"));
    }
}
