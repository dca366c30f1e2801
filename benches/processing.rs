use criterion::*;

use sequence_processing::processing::{filter_by_condition, find, map_by_data_type};
use sequence_processing::types::{DataType, Value};

const SEQ_LEN: usize = 10_000;

fn mixed_values(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| match i % 4 {
            0 => Value::Null,
            1 => Value::Int64(i as i64),
            2 => Value::Utf8(format!("item-{i}")),
            _ => Value::Float64(i as f64 / 3.0),
        })
        .collect()
}

fn find_match_at_end(b: &mut Bencher) {
    let items: Vec<i64> = (0..SEQ_LEN as i64).collect();
    let last = SEQ_LEN as i64 - 1;
    b.iter(|| find(black_box(&items), |n, _, _| *n == last));
}

fn find_no_match(b: &mut Bencher) {
    let items: Vec<i64> = (0..SEQ_LEN as i64).collect();
    b.iter(|| find(black_box(&items), |n, _, _| *n < 0));
}

fn map_integers_in_mixed(b: &mut Bencher) {
    let items = mixed_values(SEQ_LEN);
    b.iter(|| {
        map_by_data_type(
            black_box(&items),
            |item, _, _| match item {
                Value::Int64(n) => Value::Int64(n * 10),
                other => other.clone(),
            },
            DataType::Int64,
        )
    });
}

fn filter_gated_numerics(b: &mut Bencher) {
    let items = mixed_values(SEQ_LEN);
    b.iter(|| {
        filter_by_condition(
            black_box(&items),
            |index, _| index % 2 == 0,
            |item, _, _| item.is_numeric(),
        )
    });
}

fn bench_processing(c: &mut Criterion) {
    c.bench_function("processing::find_match_at_end", find_match_at_end);
    c.bench_function("processing::find_no_match", find_no_match);
    c.bench_function("processing::map_integers_in_mixed", map_integers_in_mixed);
    c.bench_function("processing::filter_gated_numerics", filter_gated_numerics);
}

criterion_group!(benches, bench_processing);
criterion_main!(benches);
