use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fileunity::{TableBuilder, TsvUnit, Unit};

fn table(rows: usize) -> TsvUnit {
    let mut builder = TableBuilder::with_columns(["id", "name", "score", "comment"]);
    for i in 0..rows {
        builder = builder.add_row([
            i.to_string(),
            format!("name {i}"),
            (i * 7 % 100).to_string(),
            "lorem ipsum dolor sit amet".to_string(),
        ]);
    }
    builder.build().unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let table = table(1000);
    let text = table.to_text().unwrap();

    c.bench_function("write 1000", |b| b.iter(|| black_box(&table).to_text()));
    c.bench_function("read 1000", |b| {
        b.iter(|| TsvUnit::by_str(black_box(&text)))
    });
    c.bench_function("select rows", |b| {
        b.iter(|| black_box(&table).get(black_box(100_usize..900)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
