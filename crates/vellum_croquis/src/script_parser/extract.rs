//! Name extraction from object literals, array literals and binding
//! patterns.

use oxc_ast::ast::{
    ArrayExpression, ArrayExpressionElement, BindingPattern, CallExpression,
    Expression, ObjectExpression, ObjectPropertyKind, PropertyKey,
};

use super::unwrap_expression;
use crate::{Binding, BindingCategory};

/// Name and end offset of a non-computed identifier or string key.
#[inline]
pub fn property_name<'k>(key: &'k PropertyKey<'_>) -> Option<(&'k str, u32)> {
    let (name, end) = match key {
        PropertyKey::StaticIdentifier(id) => (id.name.as_str(), id.span.end),
        PropertyKey::StringLiteral(s) => (s.value.as_str(), s.span.end),
        _ => return None,
    };
    (!name.is_empty()).then_some((name, end))
}

/// First call argument, unwrapped.
pub fn first_argument<'b, 'a>(call: &'b CallExpression<'a>) -> Option<&'b Expression<'a>> {
    call.arguments
        .first()
        .and_then(|arg| arg.as_expression())
        .map(unwrap_expression)
}

/// Every property of an object literal. Spreads of object literals, and of
/// calls whose first argument is an object or array literal, are followed.
pub fn object_bindings(obj: &ObjectExpression<'_>, category: BindingCategory, out: &mut Vec<Binding>) {
    for property in obj.properties.iter() {
        match property {
            ObjectPropertyKind::ObjectProperty(p) => {
                if p.computed {
                    continue;
                }
                if let Some((name, end)) = property_name(&p.key) {
                    out.push(Binding::new(name, category, end));
                }
            }
            ObjectPropertyKind::SpreadProperty(spread) => {
                match unwrap_expression(&spread.argument) {
                    Expression::ObjectExpression(inner) => object_bindings(inner, category, out),
                    Expression::CallExpression(call) => call_argument_bindings(call, category, out),
                    _ => {}
                }
            }
        }
    }
}

/// Identifier and string elements of an array literal, positioned at the end
/// of each element.
pub fn array_bindings(arr: &ArrayExpression<'_>, category: BindingCategory, out: &mut Vec<Binding>) {
    for element in arr.elements.iter() {
        match element {
            ArrayExpressionElement::Identifier(id) => {
                out.push(Binding::new(id.name.as_str(), category, id.span.end));
            }
            ArrayExpressionElement::StringLiteral(s) if !s.value.is_empty() => {
                out.push(Binding::new(s.value.as_str(), category, s.span.end));
            }
            _ => {}
        }
    }
}

/// `helper({ ... })` or `helper([ ... ])`.
pub fn call_argument_bindings(
    call: &CallExpression<'_>,
    category: BindingCategory,
    out: &mut Vec<Binding>,
) {
    match first_argument(call) {
        Some(Expression::ObjectExpression(obj)) => object_bindings(obj, category, out),
        Some(Expression::ArrayExpression(arr)) => array_bindings(arr, category, out),
        _ => {}
    }
}

/// Every identifier a declaration pattern introduces.
pub fn pattern_bindings(pattern: &BindingPattern<'_>, category: BindingCategory, out: &mut Vec<Binding>) {
    match pattern {
        BindingPattern::BindingIdentifier(id) => {
            out.push(Binding::new(id.name.as_str(), category, id.span.end));
        }
        BindingPattern::ObjectPattern(obj) => {
            for prop in obj.properties.iter() {
                pattern_bindings(&prop.value, category, out);
            }
            if let Some(rest) = &obj.rest {
                pattern_bindings(&rest.argument, category, out);
            }
        }
        BindingPattern::ArrayPattern(arr) => {
            for elem in arr.elements.iter().flatten() {
                pattern_bindings(elem, category, out);
            }
            if let Some(rest) = &arr.rest {
                pattern_bindings(&rest.argument, category, out);
            }
        }
        BindingPattern::AssignmentPattern(assign) => {
            pattern_bindings(&assign.left, category, out);
        }
    }
}
