//! End-to-end conversion properties, exercised through the public entry
//! point only.

use crate::mappings::tag_entries;
use crate::{convert_source, NO_COMPONENTS_FOUND};

#[test]
fn test_conversion_is_deterministic() {
    let source = r#"
        function Icon({ size = 24 }) {
            return <Svg width={size} height={size}><Circle cx={12} cy={12} r={10} /></Svg>;
        }
    "#;
    let first = convert_source(source);
    let second = convert_source(source);
    assert_eq!(first, second);
    assert!(!first.document.is_empty());
}

#[test]
fn test_every_component_tag_round_trips() {
    for (component, tag) in tag_entries() {
        if tag == "svg" {
            // A nested container gets root post-processing, not a bare tag.
            continue;
        }
        let source = format!("const Icon = () => <Svg><{} /></Svg>;", component);
        let result = convert_source(&source);
        assert!(
            result.document.contains(&format!("<{}/>", tag)),
            "expected <{}/> for component {} in:\n{}",
            tag,
            component,
            result.document
        );
    }
}

#[test]
fn test_view_box_synthesis_from_dimensions() {
    let result = convert_source("const Banner = () => <Svg width={200} height={100} />;");
    assert!(result
        .document
        .contains(r#"width="200" height="100" viewBox="0 0 200 100" xmlns="#));
}

#[test]
fn test_view_box_synthesis_without_dimensions() {
    let result = convert_source("const Blank = () => <Svg />;");
    assert!(result.document.contains(r#"viewBox="0 0 100 100""#));
}

#[test]
fn test_namespace_injected_once_after_user_attributes() {
    let result = convert_source(
        r#"const Icon = () => <Svg width={24} height={24} viewBox="0 0 24 24"><Path d="M0 0" /></Svg>;"#,
    );
    assert_eq!(result.document.matches("xmlns=").count(), 1);
    assert!(result.document.starts_with(
        r#"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">"#
    ));
}

#[test]
fn test_defaulted_parameter_substitution() {
    let result = convert_source(
        r##"
        function Icon({ color = "#ff0000" }) {
            return <Svg width={10} height={10} fill={color} />;
        }
        "##,
    );
    assert!(result.document.contains(r##"fill="#ff0000""##));
}

#[test]
fn test_undefaulted_identifier_becomes_placeholder() {
    let result = convert_source(
        r#"
        function Icon({ color }) {
            return <Svg width={10} height={10} fill={color} />;
        }
        "#,
    );
    assert!(result.document.contains(r#"fill="var(--color)""#));
}

#[test]
fn test_member_chain_becomes_placeholder() {
    let result = convert_source(
        "const Icon = () => <Svg width={10} height={10} fill={theme.colors.primary} />;",
    );
    assert!(result.document.contains(r#"fill="var(--theme-colors-primary)""#));
}

#[test]
fn test_literal_array_joined_with_spaces() {
    let result = convert_source(
        "const Dashed = () => <Svg width={10} height={10} strokeDasharray={[5, 10]} />;",
    );
    assert!(result.document.contains(r#"stroke-dasharray="5 10""#));
}

#[test]
fn test_dynamic_array_attribute_omitted() {
    let result = convert_source(
        "const Dashed = () => <Svg width={10} height={10} strokeDasharray={[5, gap]} />;",
    );
    assert!(!result.document.contains("stroke-dasharray"));
}

#[test]
fn test_static_template_literal_value() {
    let result = convert_source(
        "const Icon = () => <Svg width={10} height={10} fill={`rebeccapurple`} />;",
    );
    assert!(result.document.contains(r#"fill="rebeccapurple""#));
}

#[test]
fn test_bare_attribute_is_true() {
    let result = convert_source("const Icon = () => <Svg width={10} height={10} focusable />;");
    assert!(result.document.contains(r#"focusable="true""#));
}

#[test]
fn test_unresolvable_attribute_omitted() {
    let result = convert_source(
        "const Icon = () => <Svg width={10} height={10} fill={computeFill()} />;",
    );
    assert!(!result.document.contains("fill="));
    assert!(result.document.contains(r#"width="10""#));
}

#[test]
fn test_attribute_value_escaping() {
    let result = convert_source(
        r#"const Icon = () => <Svg width={10} height={10} aria-label={'a "b" & c'} />;"#,
    );
    assert!(result
        .document
        .contains(r#"aria-label="a &quot;b&quot; &amp; c""#));
}

#[test]
fn test_no_components_found() {
    let result = convert_source("const add = (a, b) => a + b;");
    assert_eq!(result.document, "");
    assert_eq!(result.diagnostics, vec![NO_COMPONENTS_FOUND.to_string()]);
}

#[test]
fn test_malformed_source() {
    let result = convert_source("function Broken({ size = ) {}");
    assert_eq!(result.document, "");
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.diagnostics[0].starts_with("Parse error:"));
}

#[test]
fn test_multiple_roots_in_source_order() {
    let result = convert_source(
        r#"
        function First() {
            return <Svg width={1} height={1} />;
        }
        function Second() {
            return <Svg width={2} height={2} />;
        }
        "#,
    );
    let blocks: Vec<&str> = result.document.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains(r#"width="1""#));
    assert!(blocks[1].contains(r#"width="2""#));
}

#[test]
fn test_unknown_component_lowercased() {
    let result = convert_source(
        "const Icon = () => <Svg width={10} height={10}><Sparkle /></Svg>;",
    );
    assert!(result.document.contains("<sparkle/>"));
}

#[test]
fn test_qualified_component_resolved_by_member() {
    let result = convert_source(
        "function Icon() { return <Svg width={10} height={10}><Svg.Circle cx={5} cy={5} r={4} /></Svg>; }",
    );
    assert!(result.document.contains(r#"<circle cx="5" cy="5" r="4"/>"#));
}

#[test]
fn test_unmapped_qualified_component_dropped() {
    let result = convert_source(
        "function Icon() { return <Svg width={10} height={10}><Lib.Widget /></Svg>; }",
    );
    assert!(!result.document.contains("widget"));
    assert!(result.document.contains("<svg"));
}

#[test]
fn test_literal_expression_children_attached() {
    let result = convert_source(
        r#"
        function Label() {
            return <Svg width={100} height={20}><Text x={0} y={10}>{"Hi"}{42}</Text></Svg>;
        }
        "#,
    );
    assert!(result.document.contains("Hi"));
    assert!(result.document.contains("42"));
}

#[test]
fn test_identifier_children_not_substituted() {
    // Attributes resolve against defaults; child text deliberately does not.
    let result = convert_source(
        r#"
        function Label({ text = "hello" }) {
            return <Svg width={100} height={20}><Text fontSize={text}>{text}</Text></Svg>;
        }
        "#,
    );
    assert!(result.document.contains(r#"font-size="hello""#));
    assert!(result.document.contains("<text font-size=\"hello\"/>"));
}

#[test]
fn test_text_children_trimmed() {
    let result = convert_source(
        r#"
        function Label() {
            return <Svg width={100} height={20}><Text>
                Hello SVG!
            </Text></Svg>;
        }
        "#,
    );
    assert!(result.document.contains("    Hello SVG!\n"));
}

#[test]
fn test_gradient_fixture_end_to_end() {
    let result = convert_source(
        r##"
        export const GradientPath = () => (
            <Svg width={200} height={200} viewBox="0 0 200 200">
                <Defs>
                    <LinearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
                        <Stop offset="0%" stopColor="#FF6B6B" />
                        <Stop offset="100%" stopColor="#4ECDC4" />
                    </LinearGradient>
                </Defs>
                <Path d="M100 10 L190 80 L160 190 L40 190 L10 80 Z" fill="url(#grad)" strokeWidth={2} />
            </Svg>
        );
        "##,
    );
    assert!(result.diagnostics.is_empty());
    assert!(result.document.contains(r#"<linearGradient id="grad""#));
    assert!(result
        .document
        .contains(r##"<stop offset="0%" stop-color="#FF6B6B"/>"##));
    assert!(result.document.contains(r#"stroke-width="2""#));
    assert!(result.document.ends_with("</svg>"));
}
