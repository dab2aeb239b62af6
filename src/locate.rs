//! Root Discovery
//!
//! Parses source text with the oxc TSX grammar and walks every
//! function-like construct looking for `Svg` roots. Each function's
//! parameter defaults are computed before its body is searched and passed
//! by reference into conversion, so no defaults scope outlives the function
//! that produced it.

use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::SourceType;
use oxc_syntax::scope::ScopeFlags;

use crate::convert::{convert_element, literal_to_string, strip_parens};
use crate::ir::{ParamDefaults, SvgNode};
use crate::mappings::svg_tag_for;

/// Discovered roots plus parse-level diagnostics.
#[derive(Debug, Default)]
pub struct LocateResult {
    pub roots: Vec<SvgNode>,
    pub diagnostics: Vec<String>,
}

/// Parse `source` and collect every convertible `Svg` root in document order.
///
/// Malformed source is a recoverable condition: the first parser diagnostic
/// is surfaced as `"Parse error: …"` and no roots are returned.
pub fn locate_roots(source: &str) -> LocateResult {
    let allocator = Allocator::default();
    let source_type = SourceType::default()
        .with_module(true)
        .with_typescript(true)
        .with_jsx(true);

    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        return LocateResult {
            roots: Vec::new(),
            diagnostics: vec![format!("Parse error: {}", ret.errors[0])],
        };
    }

    let mut locator = RootLocator { roots: Vec::new() };
    locator.visit_program(&ret.program);

    LocateResult {
        roots: locator.roots,
        diagnostics: Vec::new(),
    }
}

/// Is this element a graphic root? Either the literal `Svg` component name
/// or any identifier the tag table maps to `svg`. Qualified names like
/// `Lib.Svg` are never treated as roots.
fn is_svg_root(element: &JSXElement) -> bool {
    let name = match &element.opening_element.name {
        JSXElementName::Identifier(id) => id.name.as_str(),
        JSXElementName::IdentifierReference(id) => id.name.as_str(),
        _ => return false,
    };
    name == "Svg" || svg_tag_for(name) == Some("svg")
}

/// Outer walk: intercepts every function-like node, derives its parameter
/// defaults, and scans its body. Nested functions are reached by continuing
/// the walk, each with a freshly derived defaults scope.
struct RootLocator {
    roots: Vec<SvgNode>,
}

impl<'a> Visit<'a> for RootLocator {
    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        let defaults = extract_param_defaults(&func.params);
        if let Some(body) = &func.body {
            let mut scanner = BodyScanner {
                defaults: &defaults,
                roots: &mut self.roots,
            };
            for stmt in &body.statements {
                scanner.visit_statement(stmt);
            }
        }
        walk::walk_function(self, func, flags);
    }

    fn visit_arrow_function_expression(&mut self, arrow: &ArrowFunctionExpression<'a>) {
        let defaults = extract_param_defaults(&arrow.params);
        if arrow.expression {
            // Expression-bodied arrow: only the body expression itself is a
            // root candidate, matching the attribute/child asymmetry of the
            // rest of the engine.
            if let Some(Statement::ExpressionStatement(stmt)) = arrow.body.statements.first() {
                if let Expression::JSXElement(element) = strip_parens(&stmt.expression) {
                    if is_svg_root(element) {
                        if let Some(node) = convert_element(element, &defaults) {
                            self.roots.push(node);
                        }
                    }
                }
            }
        } else {
            let mut scanner = BodyScanner {
                defaults: &defaults,
                roots: &mut self.roots,
            };
            for stmt in &arrow.body.statements {
                scanner.visit_statement(stmt);
            }
        }
        walk::walk_arrow_function_expression(self, arrow);
    }
}

/// Inner walk over one function body. Finds roots at any depth (inside
/// conditionals, returns, initializers, non-root JSX wrappers) but stops at
/// nested function boundaries: those get their own scan with their own
/// defaults from the outer walk.
struct BodyScanner<'r, 'd> {
    defaults: &'d ParamDefaults,
    roots: &'r mut Vec<SvgNode>,
}

impl<'r, 'd, 'a> Visit<'a> for BodyScanner<'r, 'd> {
    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        if is_svg_root(element) {
            if let Some(node) = convert_element(element, self.defaults) {
                self.roots.push(node);
            }
            // The converter owns descent into the root's children.
            return;
        }
        walk::walk_jsx_element(self, element);
    }

    fn visit_function(&mut self, _func: &Function<'a>, _flags: ScopeFlags) {}

    fn visit_arrow_function_expression(&mut self, _arrow: &ArrowFunctionExpression<'a>) {}
}

/// Build the defaults scope from a parameter list.
///
/// Two forms are recognized, both limited to numeric/string literals:
/// destructured fields with defaults (`{ size = 24, color = "#000" }`) and a
/// whole-object default (`props = { size: 24 }`). Everything else stays
/// unresolved.
fn extract_param_defaults(params: &FormalParameters) -> ParamDefaults {
    let mut defaults = ParamDefaults::new();

    for param in &params.items {
        if let BindingPattern::ObjectPattern(pattern) = &param.pattern {
            for prop in &pattern.properties {
                let BindingPattern::AssignmentPattern(assignment) = &prop.value else {
                    continue;
                };
                let PropertyKey::StaticIdentifier(key) = &prop.key else {
                    continue;
                };
                if let Some(value) = literal_to_string(&assignment.right) {
                    defaults.insert(key.name.to_string(), value);
                }
            }
        }
        if let Some(initializer) = &param.initializer {
            let Expression::ObjectExpression(object) = strip_parens(initializer) else {
                continue;
            };
            for prop in &object.properties {
                let ObjectPropertyKind::ObjectProperty(prop) = prop else {
                    continue;
                };
                let PropertyKey::StaticIdentifier(key) = &prop.key else {
                    continue;
                };
                if let Some(value) = literal_to_string(&prop.value) {
                    defaults.insert(key.name.to_string(), value);
                }
            }
        }
    }

    defaults
}
