use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hijri_core::CalendarMethod;
use hijri_time::{convert, CorrespondenceDataset, GregorianDate, HijriComponents};

fn dataset_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset");
    group.sample_size(20);
    group.bench_function("build_builtin", |b| {
        b.iter(|| CorrespondenceDataset::builtin().map(|ds| ds.methods().count()))
    });
    group.finish();
}

fn single_bench(c: &mut Criterion) {
    let g = GregorianDate::from_ymd(2024, 8, 7).unwrap();
    let safar = HijriComponents::month_only(1446, 2).unwrap();

    let mut group = c.benchmark_group("single");
    for method in [CalendarMethod::HJCoSA, CalendarMethod::Mathematical] {
        group.bench_function(format!("to_hijri_{}", method.code()), |b| {
            b.iter(|| convert::to_hijri(black_box(g), method))
        });
        group.bench_function(format!("month_range_{}", method.code()), |b| {
            b.iter(|| convert::to_gregorian(black_box(&safar), method))
        });
    }
    group.finish();
}

fn batch_bench(c: &mut Criterion) {
    let start = GregorianDate::from_ymd(1950, 1, 1).unwrap().to_ordinal();
    let dates: Vec<GregorianDate> = (start..start + 10_000)
        .filter_map(|o| GregorianDate::from_ordinal(o).ok())
        .collect();

    let mut group = c.benchmark_group("batch");
    group.bench_function("to_hijri_10k_uaq", |b| {
        b.iter(|| convert::to_hijri_batch(black_box(&dates), CalendarMethod::UmmAlQura))
    });
    group.finish();
}

criterion_group!(benches, dataset_bench, single_bench, batch_bench);
criterion_main!(benches);
