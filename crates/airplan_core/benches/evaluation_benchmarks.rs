//! Criterion benchmarks for airplan_core evaluation
//!
//! Run with: cargo bench -p airplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use airplan_core::catalog::{Catalog, NOMINAL_PERIOD, ParameterValue, Parameters};
use airplan_core::evaluate::{EvalOptions, cost_analysis, synoptic_analysis};
use airplan_core::model::{DeviceKey, DeviceSpec, ProfileFamily, ProfileKind, ProfileLevel};
use airplan_core::sweep::sweep_cost_analysis;

fn create_catalog(device_count: usize) -> Catalog {
    let devices = (0..device_count)
        .map(|i| DeviceSpec {
            key: DeviceKey::new(format!("Maker{}", i % 12), format!("Model-{i}")),
            price: 100.0 + 25.0 * i as f64,
            airflow: 150.0 + 10.0 * (i % 30) as f64,
            noise_level: 40.0 + (i % 25) as f64,
            running_cost: 30.0 + 2.0 * (i % 15) as f64,
        })
        .collect();

    let mut parameters = Parameters::new();
    parameters.insert(NOMINAL_PERIOD, ParameterValue::Number(5.0));

    Catalog::new(
        devices,
        ProfileFamily::new(
            ProfileKind::Volume,
            "m3",
            vec![
                ProfileLevel::new("small", 30.0),
                ProfileLevel::new("medium", 60.0),
                ProfileLevel::new("large", 150.0),
            ],
        ),
        ProfileFamily::new(
            ProfileKind::Quality,
            "ACH",
            vec![
                ProfileLevel::new("poor", 2.0),
                ProfileLevel::new("good", 4.0),
                ProfileLevel::new("excellent", 6.0),
            ],
        ),
        parameters,
    )
}

fn bench_cost_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_analysis");
    for device_count in [25, 100, 400] {
        let catalog = create_catalog(device_count);
        let options = EvalOptions::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(device_count),
            &catalog,
            |b, catalog| {
                b.iter(|| cost_analysis(black_box(catalog), "medium", "good", &options).unwrap())
            },
        );
    }
    group.finish();
}

fn bench_synoptic_analysis(c: &mut Criterion) {
    let catalog = create_catalog(100);
    let options = EvalOptions::default();
    c.bench_function("synoptic_analysis/100", |b| {
        b.iter(|| synoptic_analysis(black_box(&catalog), "medium", "good", &options).unwrap())
    });
}

fn bench_sweep(c: &mut Criterion) {
    let catalog = create_catalog(100);
    let options = EvalOptions::default();
    c.bench_function("sweep_cost_analysis/100x9", |b| {
        b.iter(|| sweep_cost_analysis(black_box(&catalog), &options).unwrap())
    });
}

criterion_group!(
    benches,
    bench_cost_analysis,
    bench_synoptic_analysis,
    bench_sweep
);
criterion_main!(benches);
