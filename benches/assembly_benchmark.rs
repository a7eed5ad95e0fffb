//! Benchmark for dataset assembly performance
//!
//! Assembly runs once per UI interaction, so a full assemble should stay
//! well under a millisecond.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use defense_analytics_core::config::SelectionCatalog;
use defense_analytics_core::dataset::{assemble, year_range};
use defense_analytics_core::series;

fn benchmark_assembly(c: &mut Criterion) {
    let catalog = SelectionCatalog::builtin();

    // Widest dataset: every optional group gated in
    c.bench_function("assemble_overview", |b| {
        b.iter(|| assemble(&catalog, black_box("United States - Overview")))
    });

    // Core columns only, via the generic fallback
    c.bench_function("assemble_fallback", |b| {
        b.iter(|| assemble(&catalog, black_box("some unknown branch")))
    });

    c.bench_function("resolve_profile", |b| {
        b.iter(|| catalog.resolve(black_box("US Navy")))
    });

    let years = year_range();
    let profile = catalog.resolve("United States - Overview");
    c.bench_function("synthesize_budget", |b| {
        b.iter(|| series::synthesize(black_box("defense_budget"), &years, &profile).unwrap())
    });
}

criterion_group!(benches, benchmark_assembly);
criterion_main!(benches);
