//! OXC-based script analysis.
//!
//! Two modes, selected by [`ScriptOptions::setup`]:
//!
//! - Options API: the object literal behind the first `export default`
//!   (directly, or as the first argument of `defineComponent` /
//!   `Vue.extend`), see [`options`].
//! - `<script setup>`: top-level declarations and `defineProps`, see
//!   [`setup`].
//!
//! ## Module Structure
//!
//! - [`extract`] - Property, array and pattern name extraction
//! - [`options`] - Component descriptor analysis
//! - [`setup`] - `<script setup>` analysis

mod extract;
mod options;
mod setup;

use compact_str::CompactString;
use oxc_allocator::Allocator;
use oxc_ast::ast::Expression;
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde::Serialize;

use crate::Binding;

/// How to read a script region.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptOptions<'a> {
    /// Value of the `lang` attribute (`ts`, `tsx`, `js`, `jsx`).
    pub lang: Option<&'a str>,
    /// The region carries a `setup` attribute.
    pub setup: bool,
}

/// A syntax error reported by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptDiagnostic {
    pub message: CompactString,
}

/// Result of analyzing one script region. Offsets are relative to the
/// analyzed text.
#[derive(Debug, Default)]
pub struct ScriptAnalysis {
    pub bindings: Vec<Binding>,
    pub diagnostics: Vec<ScriptDiagnostic>,
    /// `export default class ...` was found. Class-style components are not
    /// analyzed.
    pub class_component: bool,
    /// The parser gave up; `bindings` is empty.
    pub panicked: bool,
}

/// Analyze a script region.
pub fn analyze_script(source: &str, options: ScriptOptions<'_>) -> ScriptAnalysis {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type(options.lang)).parse();

    let mut analysis = ScriptAnalysis {
        diagnostics: ret
            .errors
            .iter()
            .map(|error| ScriptDiagnostic {
                message: CompactString::new(error.to_string()),
            })
            .collect(),
        panicked: ret.panicked,
        ..Default::default()
    };

    if ret.panicked {
        return analysis;
    }

    if options.setup {
        setup::setup_bindings(&ret.program, &mut analysis.bindings);
    } else {
        options::analyze_export_default(&ret.program, &mut analysis);
    }

    analysis
}

/// Script and its typed dialect are read the same way; an unknown or absent
/// `lang` parses as TSX.
fn source_type(lang: Option<&str>) -> SourceType {
    match lang.map(str::to_ascii_lowercase).as_deref() {
        Some("ts") => SourceType::ts(),
        Some("js") => SourceType::mjs(),
        Some("jsx") => SourceType::jsx(),
        _ => SourceType::tsx(),
    }
}

/// Strip parentheses, `as`, `satisfies`, `<T>` assertions and `!`.
pub(crate) fn unwrap_expression<'b, 'a>(mut expr: &'b Expression<'a>) -> &'b Expression<'a> {
    loop {
        expr = match expr {
            Expression::ParenthesizedExpression(e) => &e.expression,
            Expression::TSAsExpression(e) => &e.expression,
            Expression::TSSatisfiesExpression(e) => &e.expression,
            Expression::TSTypeAssertion(e) => &e.expression,
            Expression::TSNonNullExpression(e) => &e.expression,
            _ => return expr,
        };
    }
}
