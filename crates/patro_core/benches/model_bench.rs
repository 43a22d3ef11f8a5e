use criterion::{Criterion, black_box, criterion_group, criterion_main};
use patro_core::{CalendarConfig, CalendarModel, tithi_for_day, to_nepali_number};

fn month_bench(c: &mut Criterion) {
    let model = CalendarModel::new(CalendarConfig::default()).unwrap();

    let mut group = c.benchmark_group("month");
    group.bench_function("generate_month_records", |b| {
        b.iter(|| black_box(&model).generate_month_records())
    });
    group.bench_function("month_grid", |b| b.iter(|| black_box(&model).month_grid()));
    group.bench_function("advance_and_regenerate", |b| {
        let mut m = model.clone();
        b.iter(|| {
            m.advance_month(black_box(1)).unwrap();
            m.generate_month_records()
        })
    });
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    group.bench_function("to_nepali_number", |b| {
        b.iter(|| to_nepali_number(black_box(2081)))
    });
    group.bench_function("tithi_for_day", |b| b.iter(|| tithi_for_day(black_box(23))));
    group.finish();
}

criterion_group!(benches, month_bench, lookup_bench);
criterion_main!(benches);
