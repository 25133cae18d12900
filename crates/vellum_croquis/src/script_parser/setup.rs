//! `<script setup>` analysis.
//!
//! Every top-level declaration is exposed to the template, so each one is a
//! `setup` binding; `defineProps` adds `prop` bindings.

use oxc_ast::ast::{Expression, Program, Statement, TSSignature, TSType};

use super::extract::{array_bindings, first_argument, object_bindings, pattern_bindings, property_name};
use super::unwrap_expression;
use crate::{Binding, BindingCategory};

pub fn setup_bindings(program: &Program<'_>, out: &mut Vec<Binding>) {
    for stmt in program.body.iter() {
        match stmt {
            Statement::VariableDeclaration(decl) => {
                for declarator in decl.declarations.iter() {
                    pattern_bindings(&declarator.id, BindingCategory::Setup, out);
                    if let Some(init) = &declarator.init {
                        define_props_bindings(init, out);
                    }
                }
            }
            Statement::FunctionDeclaration(func) => {
                if let Some(id) = &func.id {
                    out.push(Binding::new(id.name.as_str(), BindingCategory::Setup, id.span.end));
                }
            }
            Statement::ClassDeclaration(class) => {
                if let Some(id) = &class.id {
                    out.push(Binding::new(id.name.as_str(), BindingCategory::Setup, id.span.end));
                }
            }
            Statement::ExpressionStatement(expr_stmt) => {
                define_props_bindings(&expr_stmt.expression, out);
            }
            _ => {}
        }
    }
}

/// `defineProps(...)`, `defineProps<{ ... }>()` and
/// `withDefaults(defineProps(...), ...)`.
fn define_props_bindings(expr: &Expression<'_>, out: &mut Vec<Binding>) {
    let Expression::CallExpression(call) = unwrap_expression(expr) else {
        return;
    };
    let Expression::Identifier(callee) = &call.callee else {
        return;
    };

    match callee.name.as_str() {
        "defineProps" => {
            if let Some(type_params) = &call.type_arguments {
                for tp in type_params.params.iter() {
                    type_literal_bindings(tp, out);
                }
            }
            match first_argument(call) {
                Some(Expression::ObjectExpression(obj)) => {
                    object_bindings(obj, BindingCategory::Prop, out);
                }
                Some(Expression::ArrayExpression(arr)) => {
                    array_bindings(arr, BindingCategory::Prop, out);
                }
                _ => {}
            }
        }
        "withDefaults" => {
            if let Some(inner) = first_argument(call) {
                define_props_bindings(inner, out);
            }
        }
        _ => {}
    }
}

fn type_literal_bindings(tp: &TSType<'_>, out: &mut Vec<Binding>) {
    let TSType::TSTypeLiteral(lit) = tp else {
        return;
    };
    for member in lit.members.iter() {
        if let TSSignature::TSPropertySignature(prop) = member {
            if prop.computed {
                continue;
            }
            if let Some((name, end)) = property_name(&prop.key) {
                out.push(Binding::new(name, BindingCategory::Prop, end));
            }
        }
    }
}
