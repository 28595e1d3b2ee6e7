//! Performance benchmarks for regionscrub

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use regionscrub::test_utils::{TestFolder, sample_province};
use regionscrub::{KeyPolicy, ScrubConfig, ScrubOutput, Scrubber, TreeFilter};
use regionscrub::{FileSummary, RunSummary};

/// Discards all results so only scrubbing work is measured.
struct Sink;

impl ScrubOutput for Sink {
    fn file_done(&mut self, _file: &FileSummary) -> std::io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, _summary: &RunSummary) -> std::io::Result<()> {
        Ok(())
    }
}

fn bench_tree_filter(c: &mut Criterion) {
    let policy = KeyPolicy::regions();
    let filter = TreeFilter::new(&policy);
    let mut group = c.benchmark_group("tree_filter");

    for towns in [10, 100, 1000] {
        let doc = sample_province(towns);
        group.bench_with_input(BenchmarkId::new("filter", towns), &doc, |b, doc| {
            b.iter(|| filter.filter(black_box(doc.clone())))
        });
        group.bench_with_input(
            BenchmarkId::new("filter_with_report", towns),
            &doc,
            |b, doc| b.iter(|| filter.filter_with_report(black_box(doc.clone()))),
        );
    }

    group.finish();
}

fn bench_dry_run_folder(c: &mut Criterion) {
    let folder = TestFolder::new();
    for i in 0..50 {
        folder.add_document(&format!("province_{}.json", i), &sample_province(50));
    }
    let config = ScrubConfig {
        folder: folder.path().to_path_buf(),
        dry_run: true,
        ..Default::default()
    };
    let scrubber = Scrubber::new(config, KeyPolicy::regions());

    c.bench_function("dry_run_50_files", |b| {
        b.iter(|| scrubber.run(black_box(&mut Sink)))
    });
}

criterion_group!(benches, bench_tree_filter, bench_dry_run_folder);
criterion_main!(benches);
