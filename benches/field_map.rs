use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ek_electrostatics::fields::{e_mag, LineChargePair, PairField};
use ek_electrostatics::materials::Medium;
use ek_electrostatics::sweep::{sample_field_map, GridSpec};

fn test_cell() -> PairField {
    let soil = Medium::new(10.0).expect("valid permittivity");
    PairField::from_charge(LineChargePair::new(0.0, 0.1, -0.1), 1.0e-9, &soil)
}

fn bench_point_eval(c: &mut Criterion) {
    let source = test_cell();
    c.bench_function("e_mag_point", |b| {
        b.iter(|| {
            e_mag(
                black_box(0.03),
                black_box(0.02),
                0.0,
                source.pair.z_anode,
                source.pair.z_cathode,
                source.k,
            )
        })
    });
}

fn bench_field_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_map");
    let grid = GridSpec {
        x_min: 0.013,
        x_max: 0.25,
        nx: 200,
        z_min: -0.25,
        z_max: 0.25,
        nz: 200,
    };

    group.bench_function(BenchmarkId::new("pair", grid.len()), |b| {
        b.iter_batched(
            test_cell,
            |source| {
                let _ = sample_field_map(&source, &grid);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_point_eval, bench_field_map);
criterion_main!(benches);
