//! Benchmarks for note store operations.
//!
//! Every store query rescans the notes directory, so these track how
//! listing, backlinks and search scale with the number of files.
//!
//! Run with: cargo bench --bench store_benchmarks

use anada::store::{NoteStore, snippet, SNIPPET_CONTEXT};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::TempDir;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Sample words for generating realistic note content
const WORDS: &[&str] = &[
    "architecture",
    "design",
    "pattern",
    "system",
    "component",
    "interface",
    "module",
    "function",
    "testing",
    "integration",
    "performance",
    "optimization",
];

const SIZES: [usize; 3] = [100, 500, 1000];

fn note_title(index: usize) -> String {
    format!("Note {} {}", index, WORDS[index % WORDS.len()])
}

/// Generate a note body linking to a couple of earlier notes
fn generate_note_content(index: usize) -> String {
    let body: Vec<&str> = (0..60).map(|j| WORDS[(index + j) % WORDS.len()]).collect();
    format!(
        "---\ncreated: 2024-01-15T10:30:00.000000\n---\n\n# {}\n\n{}\n\nSee [[{}]] and [[hub]].\n",
        note_title(index),
        body.join(" "),
        note_title(index / 2),
    )
}

/// Create a store over a temporary directory holding N notes
fn setup_store_with_notes(count: usize) -> (NoteStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = NoteStore::open(dir.path()).expect("Failed to open store");
    for i in 0..count {
        store
            .update(&note_title(i), &generate_note_content(i))
            .expect("Failed to write note");
    }
    (store, dir)
}

// =============================================================================
// Store Benchmarks
// =============================================================================

fn bench_list_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_all");

    for size in SIZES {
        let (store, _dir) = setup_store_with_notes(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("notes", size), &size, |b, _| {
            b.iter(|| store.list_all().unwrap());
        });
    }

    group.finish();
}

fn bench_backlinks(c: &mut Criterion) {
    let mut group = c.benchmark_group("backlinks_to");

    for size in SIZES {
        let (store, _dir) = setup_store_with_notes(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("hub", size), &size, |b, _| {
            b.iter(|| store.backlinks_to("hub").unwrap());
        });
        group.bench_with_input(BenchmarkId::new("rare", size), &size, |b, _| {
            b.iter(|| store.backlinks_to(&note_title(1)).unwrap());
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let (store, _dir) = setup_store_with_notes(1000);

    let mut group = c.benchmark_group("search");

    group.bench_function("common_term", |b| {
        b.iter(|| store.search("design").unwrap())
    });

    group.bench_function("mixed_case", |b| {
        b.iter(|| store.search("PERFORMANCE").unwrap())
    });

    group.bench_function("no_matches", |b| {
        b.iter(|| store.search("zebra").unwrap())
    });

    group.finish();
}

fn bench_snippet(c: &mut Criterion) {
    let content = generate_note_content(7).repeat(20);

    c.bench_function("snippet", |b| {
        b.iter(|| snippet(&content, "optimization", SNIPPET_CONTEXT))
    });
}

// =============================================================================
// Criterion Groups
// =============================================================================

criterion_group!(store_benches, bench_list_all, bench_backlinks, bench_search);

criterion_group!(text_benches, bench_snippet);

criterion_main!(store_benches, text_benches);
