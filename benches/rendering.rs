use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;
use tempfile::TempDir;
use textkit::format::tab_flex_to;
use textkit::{comma_sep, read_csv_file, TableConfig};

fn sample_rows(count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|i| {
            vec![
                i.to_string(),
                format!("name_{}", i),
                format!("{}", i * 37 % 1000),
            ]
        })
        .collect()
}

fn benchmark_tab_flex(c: &mut Criterion) {
    let headers: &[&str] = &["id", "name", "score"];
    let rows = sample_rows(1000);
    let config = TableConfig::default();

    c.bench_function("tab_flex_1000_rows", |b| {
        b.iter(|| {
            tab_flex_to(io::sink(), &config, black_box(headers), black_box(rows.as_slice())).unwrap();
        });
    });
}

fn benchmark_csv_round_trip(c: &mut Criterion) {
    let headers = vec!["id".to_string(), "name".to_string(), "score".to_string()];
    let rows = sample_rows(1000);
    let mut counter = 0usize;

    c.bench_function("csv_round_trip_1000_rows", |b| {
        let temp_dir = TempDir::new().unwrap();
        b.iter(|| {
            counter += 1;
            let path = temp_dir.path().join(format!("bench_{}.csv", counter));
            comma_sep(&path, &headers, &rows);
            black_box(read_csv_file(&path));
        });
    });
}

criterion_group!(benches, benchmark_tab_flex, benchmark_csv_round_trip);
criterion_main!(benches);
