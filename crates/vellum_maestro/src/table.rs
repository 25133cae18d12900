//! Definition table and lookup.

use compact_str::CompactString;
use serde::Serialize;
use vellum_carton::SourceRange;
use vellum_croquis::{Binding, BindingCategory};

use crate::AnalysisWarning;

/// A resolved definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionLocation {
    pub name: CompactString,
    pub category: BindingCategory,
    /// File offset to navigate to.
    pub offset: u32,
}

impl From<&Binding> for DefinitionLocation {
    fn from(binding: &Binding) -> Self {
        Self {
            name: binding.name.clone(),
            category: binding.category,
            offset: binding.position,
        }
    }
}

/// Every binding of one file, in collection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DefinitionTable {
    bindings: Vec<Binding>,
    warnings: Vec<AnalysisWarning>,
}

impl DefinitionTable {
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn warnings(&self) -> &[AnalysisWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub(crate) fn extend(&mut self, bindings: impl IntoIterator<Item = Binding>) {
        self.bindings.extend(bindings);
    }

    pub(crate) fn warn(&mut self, warning: AnalysisWarning) {
        self.warnings.push(warning);
    }

    /// Definitions of `name` visible from `target`.
    ///
    /// Names match exactly. A binding with an active scope only matches when
    /// the scope contains `target`; every other binding always matches. When
    /// several categories define the same name, all of them are returned.
    pub fn query(&self, name: &str, target: SourceRange) -> Vec<DefinitionLocation> {
        self.bindings
            .iter()
            .filter(|b| b.name == name && b.is_visible_from(target))
            .map(DefinitionLocation::from)
            .collect()
    }
}
