//! Component descriptor analysis.
//!
//! Handles the option keys that introduce template-visible names:
//! - `components`, `props`
//! - `setup`, `data` (the returned object literal)
//! - `computed`, `methods` (object literal, or a helper call around one)

use oxc_ast::ast::{
    ExportDefaultDeclarationKind, Expression, FunctionBody, ObjectExpression, ObjectPropertyKind,
    Program, PropertyKey, Statement,
};

use super::extract::{array_bindings, call_argument_bindings, first_argument, object_bindings};
use super::{unwrap_expression, ScriptAnalysis};
use crate::{Binding, BindingCategory};

/// Analyze the first `export default` of the program.
pub fn analyze_export_default(program: &Program<'_>, analysis: &mut ScriptAnalysis) {
    let Some(export) = program.body.iter().find_map(|stmt| match stmt {
        Statement::ExportDefaultDeclaration(export) => Some(export),
        _ => None,
    }) else {
        return;
    };

    match &export.declaration {
        ExportDefaultDeclarationKind::ClassDeclaration(_) => analysis.class_component = true,
        kind => {
            if let Some(descriptor) = kind.as_expression().and_then(component_descriptor) {
                option_bindings(descriptor, &mut analysis.bindings);
            }
        }
    }
}

/// `{ ... }` or `wrapper({ ... })`.
fn component_descriptor<'b, 'a>(expr: &'b Expression<'a>) -> Option<&'b ObjectExpression<'a>> {
    match unwrap_expression(expr) {
        Expression::ObjectExpression(obj) => Some(&**obj),
        Expression::CallExpression(call) => match first_argument(call)? {
            Expression::ObjectExpression(obj) => Some(&**obj),
            _ => None,
        },
        _ => None,
    }
}

fn option_bindings(descriptor: &ObjectExpression<'_>, out: &mut Vec<Binding>) {
    for property in descriptor.properties.iter() {
        let ObjectPropertyKind::ObjectProperty(p) = property else {
            continue;
        };
        if p.computed {
            continue;
        }
        let PropertyKey::StaticIdentifier(key) = &p.key else {
            continue;
        };
        let value = unwrap_expression(&p.value);

        match key.name.as_str() {
            "components" => {
                if let Expression::ObjectExpression(obj) = value {
                    object_bindings(obj, BindingCategory::Component, out);
                }
            }
            "props" => match value {
                Expression::ObjectExpression(obj) => object_bindings(obj, BindingCategory::Prop, out),
                Expression::ArrayExpression(arr) => array_bindings(arr, BindingCategory::Prop, out),
                _ => {}
            },
            "setup" => {
                if let Some(obj) = returned_object(value) {
                    object_bindings(obj, BindingCategory::Setup, out);
                }
            }
            "data" => {
                if let Some(obj) = returned_object(value) {
                    object_bindings(obj, BindingCategory::Data, out);
                }
            }
            "computed" => grouped_bindings(value, BindingCategory::Computed, out),
            "methods" => grouped_bindings(value, BindingCategory::Method, out),
            _ => {}
        }
    }
}

fn grouped_bindings(value: &Expression<'_>, category: BindingCategory, out: &mut Vec<Binding>) {
    match value {
        Expression::ObjectExpression(obj) => object_bindings(obj, category, out),
        Expression::CallExpression(call) => call_argument_bindings(call, category, out),
        _ => {}
    }
}

/// The object literal a function returns: the first top-level
/// `return { ... }` of its body, or the body of `() => ({ ... })`.
fn returned_object<'b, 'a>(value: &'b Expression<'a>) -> Option<&'b ObjectExpression<'a>> {
    let body: &FunctionBody<'a> = match value {
        Expression::FunctionExpression(func) => func.body.as_deref()?,
        Expression::ArrowFunctionExpression(arrow) if arrow.expression => {
            let Some(Statement::ExpressionStatement(stmt)) = arrow.body.statements.first() else {
                return None;
            };
            return match unwrap_expression(&stmt.expression) {
                Expression::ObjectExpression(obj) => Some(&**obj),
                _ => None,
            };
        }
        Expression::ArrowFunctionExpression(arrow) => &arrow.body,
        _ => return None,
    };

    body.statements.iter().find_map(|stmt| match stmt {
        Statement::ReturnStatement(ret) => match ret.argument.as_ref().map(unwrap_expression) {
            Some(Expression::ObjectExpression(obj)) => Some(&**obj),
            _ => None,
        },
        _ => None,
    })
}
