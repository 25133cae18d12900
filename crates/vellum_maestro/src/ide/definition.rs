//! Definition provider.
//!
//! Turns a cursor offset into the word under it and looks that word up in
//! the document's definition table.

use compact_str::CompactString;
use serde::Serialize;
use vellum_carton::{word_at_offset, SourceRange};

use crate::{DefinitionCollector, DefinitionLocation, DefinitionTable};

/// Answer to a go-to-definition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GotoDefinition {
    /// The identifier under the cursor.
    pub word: CompactString,
    /// Where that identifier sits in the document.
    pub range: SourceRange,
    pub locations: Vec<DefinitionLocation>,
}

/// Definition service for providing go-to-definition functionality.
pub struct DefinitionService;

impl DefinitionService {
    /// Build the table for `source` and resolve the word at `offset`.
    pub fn definition_at(source: &str, offset: u32) -> Option<GotoDefinition> {
        let table = DefinitionCollector::new().build(source);
        Self::definition_in(&table, source, offset)
    }

    /// Resolve the word at `offset` against an already built table. `None`
    /// when the cursor is not on an identifier.
    pub fn definition_in(
        table: &DefinitionTable,
        source: &str,
        offset: u32,
    ) -> Option<GotoDefinition> {
        let (range, word) = word_at_offset(source, offset)?;
        Some(GotoDefinition {
            word: CompactString::new(word),
            range,
            locations: table.query(word, range),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_croquis::BindingCategory;

    const SFC: &str = r#"<template>
  <ul>
    <li v-for="todo in todos" :key="todo.id">{{ todo.title }}</li>
  </ul>
  <span>{{ todo }}</span>
</template>
<script>
export default {
  props: ['todos'],
}
</script>"#;

    #[test]
    fn test_scoped_reference() {
        let offset = SFC.find("todo.title").unwrap() as u32 + 2;
        let result = DefinitionService::definition_at(SFC, offset).unwrap();

        assert_eq!(result.word, "todo");
        assert_eq!(result.locations.len(), 1);
        assert_eq!(result.locations[0].category, BindingCategory::VForScope);
        assert_eq!(result.locations[0].offset, SFC.find("todo in").unwrap() as u32);
    }

    #[test]
    fn test_reference_outside_scope() {
        let offset = SFC.find("{{ todo }}").unwrap() as u32 + 3;
        let result = DefinitionService::definition_at(SFC, offset).unwrap();
        assert_eq!(result.word, "todo");
        assert!(result.locations.is_empty());
    }

    #[test]
    fn test_script_binding_from_template() {
        let offset = SFC.find("in todos").unwrap() as u32 + 4;
        let result = DefinitionService::definition_at(SFC, offset).unwrap();
        assert_eq!(result.word, "todos");
        assert_eq!(result.locations.len(), 1);
        assert_eq!(result.locations[0].category, BindingCategory::Prop);
    }

    #[test]
    fn test_cursor_not_on_word() {
        let offset = SFC.find("<ul>").unwrap() as u32;
        assert_eq!(DefinitionService::definition_at(SFC, offset), None);
    }
}
