//! Binding definitions shared by all analyzers.

use compact_str::CompactString;
use serde::Serialize;
use vellum_carton::SourceRange;

/// What kind of declaration introduced a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum BindingCategory {
    /// Entry of the `components` option
    Component,
    /// Returned from `setup()`, or declared at the top of `<script setup>`
    Setup,
    /// `props` option or `defineProps`
    Prop,
    /// Returned from `data()`
    Data,
    /// `computed` option
    Computed,
    /// `methods` option
    Method,
    /// `ref="..."` on a template element
    Ref,
    /// Alias of a `v-for`
    VForScope,
    /// `v-slot` / `slot-scope` variable
    SlotScope,
    /// `.name { ... }`
    StyleClass,
    /// `#name { ... }`
    StyleId,
}

impl BindingCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Setup => "setup",
            Self::Prop => "prop",
            Self::Data => "data",
            Self::Computed => "computed",
            Self::Method => "method",
            Self::Ref => "ref",
            Self::VForScope => "v-for-scope",
            Self::SlotScope => "slot-scope",
            Self::StyleClass => "style-class",
            Self::StyleId => "style-id",
        }
    }

    /// Loop and slot variables are only visible inside the element that
    /// declares them.
    pub const fn is_range_scoped(self) -> bool {
        matches!(self, Self::VForScope | Self::SlotScope)
    }
}

impl std::fmt::Display for BindingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, categorized, located definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub name: CompactString,
    pub category: BindingCategory,
    /// Navigation target: a single offset, not the declaration's span.
    pub position: u32,
    /// Where the name is visible. `None` means everywhere in the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_scope: Option<SourceRange>,
}

impl Binding {
    pub fn new(name: impl Into<CompactString>, category: BindingCategory, position: u32) -> Self {
        Self {
            name: name.into(),
            category,
            position,
            active_scope: None,
        }
    }

    pub fn scoped(
        name: impl Into<CompactString>,
        category: BindingCategory,
        position: u32,
        active_scope: SourceRange,
    ) -> Self {
        Self {
            active_scope: Some(active_scope),
            ..Self::new(name, category, position)
        }
    }

    /// Rebase a region-relative binding onto the file.
    #[must_use]
    pub fn shift(self, base: u32) -> Self {
        Self {
            position: self.position + base,
            active_scope: self.active_scope.map(|s| s.shift(base)),
            ..self
        }
    }

    /// Whether a reference at `target` can see this binding. Only loop and
    /// slot variables are limited to their scope.
    #[inline]
    pub fn is_visible_from(&self, target: SourceRange) -> bool {
        if !self.category.is_range_scoped() {
            return true;
        }
        self.active_scope
            .map_or(true, |scope| scope.contains(target))
    }
}
