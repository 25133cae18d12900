//! Whole-document go-to-definition scenarios.

use vellum_carton::SourceRange;
use vellum_croquis::BindingCategory;
use vellum_maestro::{resolve_definitions, DefinitionCollector, DefinitionService, DefinitionTable};

/// One line per binding: category, name, and whether it is range-scoped.
fn render(table: &DefinitionTable) -> String {
    table
        .bindings()
        .iter()
        .map(|b| {
            let scoped = if b.active_scope.is_some() { " (scoped)" } else { "" };
            format!("{:<12} {}{}", b.category.as_str(), b.name, scoped)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Range of the `nth` occurrence of `needle`.
fn occurrence(source: &str, needle: &str, nth: usize) -> SourceRange {
    let start = source
        .match_indices(needle)
        .nth(nth)
        .map(|(i, _)| i as u32)
        .unwrap_or_else(|| panic!("`{needle}` #{nth} not found"));
    SourceRange::new(start, start + needle.len() as u32)
}

const TODO_LIST: &str = r#"<template>
  <section ref="panel" class="todo-list">
    <TodoItem
      v-for="(todo, index) in visible"
      :key="todo.id"
      :index="index"
      @remove="remove(todo)"
    />
    <Pager #default="{ page, total }">
      <span>{{ page }} / {{ total }}</span>
    </Pager>
    <p v-if="!visible.length">{{ emptyText }}</p>
  </section>
</template>

<script lang="ts">
import { defineComponent } from 'vue'
import TodoItem from './TodoItem.vue'
import Pager from './Pager.vue'

export default defineComponent({
  name: 'TodoList',
  components: { TodoItem, Pager },
  props: {
    todos: { type: Array, required: true },
    emptyText: String,
  },
  data() {
    return { filter: 'all' as 'all' | 'done' }
  },
  computed: {
    ...mapGetters(['user']),
    visible(): Todo[] {
      return this.todos.filter(t => this.filter === 'all' || t.done)
    },
  },
  methods: {
    ...mapActions({ remove: 'todos/remove' }),
    clear() {},
  },
})
</script>

<style scoped>
.todo-list { padding: 0 }
/* .legacy { } */
#pager { margin: 0 }
</style>
"#;

#[test]
fn test_table_snapshot() {
    let table = DefinitionCollector::new().build(TODO_LIST);
    insta::assert_snapshot!(render(&table), @r"
    ref          panel
    v-for-scope  todo (scoped)
    v-for-scope  index (scoped)
    slot-scope   page (scoped)
    slot-scope   total (scoped)
    component    TodoItem
    component    Pager
    prop         todos
    prop         emptyText
    data         filter
    computed     user
    computed     visible
    method       remove
    method       clear
    style-class  todo-list
    style-id     pager
    ");
    assert!(table.warnings().is_empty());
}

#[test]
fn test_self_closing_loop_scope() {
    // `<TodoItem ... />` never has content, so its loop variables are only
    // visible inside its own tag.
    let inside = occurrence(TODO_LIST, "todo", 2);
    let found = resolve_definitions(TODO_LIST, "todo", inside);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category, BindingCategory::VForScope);

    let after = occurrence(TODO_LIST, "page", 1);
    assert!(resolve_definitions(TODO_LIST, "todo", after).is_empty());
}

#[test]
fn test_slot_variables() {
    let usage = occurrence(TODO_LIST, "{{ page }}", 0);
    let usage = SourceRange::new(usage.start + 3, usage.start + 7);
    let found = resolve_definitions(TODO_LIST, "page", usage);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category, BindingCategory::SlotScope);
    assert_eq!(found[0].offset, occurrence(TODO_LIST, "page", 0).start);

    // `<p>` after `</Pager>` is outside the slot element.
    let outside = occurrence(TODO_LIST, "emptyText", 0);
    assert!(resolve_definitions(TODO_LIST, "page", outside).is_empty());
    assert!(resolve_definitions(TODO_LIST, "total", outside).is_empty());
}

#[test]
fn test_template_reaches_script() {
    let usage = occurrence(TODO_LIST, "emptyText", 0);
    let found = resolve_definitions(TODO_LIST, "emptyText", usage);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category, BindingCategory::Prop);
    assert_eq!(found[0].offset, occurrence(TODO_LIST, "emptyText", 1).end);
}

#[test]
fn test_mapped_helper_keys() {
    // Keys of a `mapActions({...})` spread are methods; its string values are
    // not bindings.
    let usage = occurrence(TODO_LIST, "remove", 1);
    let found = resolve_definitions(TODO_LIST, "remove", usage);
    assert_eq!(
        found.iter().map(|l| l.category).collect::<Vec<_>>(),
        vec![BindingCategory::Method]
    );
}

#[test]
fn test_ref_resolves_anywhere() {
    let far = SourceRange::new(TODO_LIST.len() as u32 - 2, TODO_LIST.len() as u32);
    let found = resolve_definitions(TODO_LIST, "panel", far);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].offset, occurrence(TODO_LIST, "panel", 0).start);
}

#[test]
fn test_style_names() {
    let found = resolve_definitions(TODO_LIST, "todo-list", SourceRange::empty(0));
    assert_eq!(
        found.iter().map(|l| l.category).collect::<Vec<_>>(),
        vec![BindingCategory::StyleClass]
    );
    assert!(resolve_definitions(TODO_LIST, "legacy", SourceRange::empty(0)).is_empty());
}

#[test]
fn test_definition_service_json() {
    let offset = occurrence(TODO_LIST, "visible", 1).start + 1;
    let result = DefinitionService::definition_at(TODO_LIST, offset).unwrap();
    assert_eq!(result.word, "visible");

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["locations"][0]["category"], "computed");
    assert_eq!(json["locations"][0]["name"], "visible");
}

const SCRIPT_SETUP: &str = r#"<script setup lang="ts">
import { ref } from 'vue'
const props = defineProps<{ title: string }>()
const open = ref(false)
function toggle() { open.value = !open.value }
</script>

<template>
  <button @click="toggle">{{ title }}</button>
  <div v-if="open"><slot /></div>
</template>
"#;

#[test]
fn test_script_setup_snapshot() {
    let table = DefinitionCollector::new().build(SCRIPT_SETUP);
    insta::assert_snapshot!(render(&table), @r"
    setup        props
    prop         title
    setup        open
    setup        toggle
    ");
}

#[test]
fn test_script_setup_lookup() {
    let usage = occurrence(SCRIPT_SETUP, "toggle", 1);
    let found = resolve_definitions(SCRIPT_SETUP, "toggle", usage);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].offset, occurrence(SCRIPT_SETUP, "toggle", 0).end);
}

#[test]
fn test_syntax_error_is_reported() {
    let source = "<template><a ref=\"x\"/></template>\n<script>\nexport default { data() { return { y: 1 } }\n</script>";
    let table = DefinitionCollector::new().build(source);
    assert!(!table.warnings().is_empty());
    assert!(table.bindings().iter().any(|b| b.name == "x"));
}
