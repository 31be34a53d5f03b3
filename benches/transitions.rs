//! Benchmarks for control transitions
//!
//! Run with: cargo bench transitions

use inline_edit::text_field::TextEditMsg;
use inline_edit::{update, Callbacks, Editable, EditableConfig, EditableModel, Msg};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn config(value: &str) -> EditableConfig {
    EditableConfig {
        default_value: Some(value.to_string()),
        ..Default::default()
    }
}

// ============================================================================
// Benchmarks: full edit cycles
// ============================================================================

#[divan::bench(args = [16, 256, 4_096])]
fn focus_type_submit(len: usize) {
    let mut model = EditableModel::new(config(&"x".repeat(len)), None);
    divan::black_box(update(&mut model, Msg::focus_preview()));
    for ch in "replacement".chars() {
        divan::black_box(update(&mut model, Msg::edit(TextEditMsg::InsertChar(ch))));
    }
    divan::black_box(update(&mut model, Msg::key("Enter")));
}

#[divan::bench(args = [16, 256, 4_096])]
fn focus_change_cancel(len: usize) {
    let mut model = EditableModel::new(config(&"x".repeat(len)), None);
    divan::black_box(update(&mut model, Msg::focus_preview()));
    divan::black_box(update(&mut model, Msg::change("y".repeat(len))));
    divan::black_box(update(&mut model, Msg::key("Escape")));
}

#[divan::bench]
fn runtime_cycle_with_callbacks() {
    let mut submitted = 0usize;
    let callbacks = Callbacks::new().on_submit(move |v| {
        submitted += v.len();
        divan::black_box(submitted);
    });
    let mut editable = Editable::new(config("Hello"), None, callbacks);
    editable.focus_preview();
    editable.type_text("World");
    editable.input_key("Enter");
    divan::black_box(editable.value());
}

// ============================================================================
// Benchmarks: controlled render passes
// ============================================================================

#[divan::bench(args = [1, 10, 100])]
fn external_updates_while_editing(updates: usize) {
    let mut model = EditableModel::new(EditableConfig::default(), Some("start".into()));
    update(&mut model, Msg::focus_preview());
    for i in 0..updates {
        let value = format!("external {}", i);
        divan::black_box(update(&mut model, Msg::set_value(Some(value.as_str()))));
    }
    divan::black_box(update(&mut model, Msg::key("Escape")));
}
