//! Benchmarks for buffer editing and text layout.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use spudpad::editor::EditorBuffer;
use spudpad::ui::layout;

fn sample_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {i}: the quick brown fox jumps over the lazy dog"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_typing(c: &mut Criterion) {
    let text = sample_text(10_000);
    c.bench_function("insert_char_middle", |b| {
        b.iter_batched(
            || {
                let mut buf = EditorBuffer::from_text(&text);
                buf.set_cursor(buf.len_chars() / 2);
                buf
            },
            |mut buf| {
                for ch in "hello world".chars() {
                    buf.insert_char(black_box(ch));
                }
                buf
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_cut_paste(c: &mut Criterion) {
    let text = sample_text(10_000);
    c.bench_function("cut_then_paste", |b| {
        b.iter_batched(
            || {
                let mut buf = EditorBuffer::from_text(&text);
                buf.select_range(1_000, 50_000);
                buf
            },
            |mut buf| {
                let cut = buf.cut().unwrap_or_default();
                buf.move_to_end();
                buf.paste(black_box(&cut));
                buf
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_status(c: &mut Criterion) {
    let mut buf = EditorBuffer::from_text(&sample_text(10_000));
    buf.move_to_end();
    c.bench_function("status_at_end", |b| b.iter(|| black_box(&buf).status()));
}

fn bench_visible_rows_wrapped(c: &mut Criterion) {
    let buf = EditorBuffer::from_text(&sample_text(10_000));
    c.bench_function("visible_rows_wrapped", |b| {
        b.iter(|| layout::visible_rows(&buf, black_box((5_000, 0)), 40, 30, true));
    });
}

criterion_group!(
    benches,
    bench_typing,
    bench_cut_paste,
    bench_status,
    bench_visible_rows_wrapped
);
criterion_main!(benches);
