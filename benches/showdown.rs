#[macro_use]
extern crate criterion;

use criterion::Criterion;
use poker_showdown::core::Hand;
use poker_showdown::showdown::{resolve, resolve_parallel};

fn table() -> Vec<(usize, Hand)> {
    [
        "2c 5d 9h Js Kc",
        "3c 3d 3h 7s 7c",
        "Ad Ac 9d 9c Ts",
        "Kc Kd 7h 7s 2c",
        "Kh Ks 7c 7d 2d",
        "Ac 2d 3h 4s 5c",
        "2c 3d 4h 5s 6c",
        "Ts Js Qs Ks As",
        "2h 5c 9s Jh Kh",
    ]
    .iter()
    .map(|h| Hand::new_from_str(h).unwrap())
    .enumerate()
    .collect()
}

fn resolve_table(c: &mut Criterion) {
    let table = table();
    c.bench_function("Resolve 9 player table", move |b| {
        b.iter(|| resolve(table.clone()))
    });
}

fn resolve_table_parallel(c: &mut Criterion) {
    let table = table();
    c.bench_function("Resolve 9 player table on 3 threads", move |b| {
        b.iter(|| resolve_parallel(table.clone(), 3))
    });
}

criterion_group!(benches, resolve_table, resolve_table_parallel);
criterion_main!(benches);
