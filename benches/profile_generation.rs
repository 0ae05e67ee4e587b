use criterion::{black_box, criterion_group, criterion_main, Criterion};

use naca_profile::airfoil::generate::generate;
use naca_profile::airfoil::spec::AirfoilSpec;
use naca_profile::plot::{PlotDescription, PlotOptions};

fn benchmark(c: &mut Criterion) {
    let symmetric = AirfoilSpec::from_naca("0012");
    let cambered = AirfoilSpec::from_naca("2412").with_increment(0.1);

    c.bench_function("Generate 0012", |b| b.iter(|| generate(black_box(&symmetric))));
    c.bench_function("Generate 2412 fine", |b| b.iter(|| generate(black_box(&cambered))));

    let profile = generate(&cambered).unwrap();
    let options = PlotOptions {
        show_legend: true,
        show_thickness: true,
    };
    c.bench_function("Plot description", |b| {
        b.iter(|| PlotDescription::from_profile(black_box(&profile), &options))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
