//! Benchmarks for note layout.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mdnotes::config::ModifierKey;
use mdnotes::document::{CellMeasure, Document};
use mdnotes::vault::welcome_text;

fn long_note() -> String {
    (0..400)
        .map(|i| match i % 4 {
            0 => format!("# Section {i}"),
            1 => format!("- item {i} with enough words to wrap across the editor pane twice over"),
            2 => String::new(),
            _ => "Plain paragraph text that keeps going well past the width of the pane. ".repeat(3),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_layout_welcome(c: &mut Criterion) {
    let text = welcome_text(ModifierKey::Control);
    c.bench_function("layout_welcome", |b| {
        b.iter(|| Document::layout(black_box(&text), black_box(50), &CellMeasure))
    });
}

fn bench_layout_long(c: &mut Criterion) {
    let text = long_note();
    c.bench_function("layout_long", |b| {
        b.iter(|| Document::layout(black_box(&text), black_box(50), &CellMeasure))
    });
}

fn bench_tail_visible_lines(c: &mut Criterion) {
    let doc = Document::layout(&long_note(), 50, &CellMeasure);
    c.bench_function("tail_visible_lines", |b| {
        b.iter(|| {
            let offset = doc.tail_offset(black_box(20), &CellMeasure);
            doc.visible_lines(offset, black_box(20), &CellMeasure).len()
        })
    });
}

criterion_group!(
    benches,
    bench_layout_welcome,
    bench_layout_long,
    bench_tail_visible_lines
);
criterion_main!(benches);
