use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ttrscore::catalog::loader::build_catalog;
use ttrscore::catalog::{DestinationRecord, RoadRecord};
use ttrscore::config::UniquenessScope;
use ttrscore::filter::filter_available;
use ttrscore::maps::GameMap;
use ttrscore::scorer::{score_for, Category, ScoreItem};
use ttrscore::store::SelectionStore;

fn synthetic_records(count: usize) -> (Vec<DestinationRecord>, Vec<RoadRecord>) {
    let destinations = (0..count)
        .map(|i| DestinationRecord {
            start: format!("City {}", i),
            end: format!("City {}", i + 1),
            score: (i % 22) as i32 + 1,
            is_long_destination: i % 10 == 0,
            map: "USA".to_string(),
        })
        .collect();
    let roads = (0..count)
        .map(|i| RoadRecord {
            start: format!("City {}", i % 40),
            end: format!("City {}", (i * 7) % 40),
            score: [1, 2, 4, 7, 10, 15][i % 6],
            wagon_number: None,
            locomotive: None,
            map: "USA".to_string(),
        })
        .collect();
    (destinations, roads)
}

fn criterion_benchmark(c: &mut Criterion) {
    let (destinations, roads) = synthetic_records(200);
    let catalog = build_catalog(GameMap::Usa, &destinations, &roads, 3);
    let roads: Vec<ScoreItem> = catalog.roads.clone();

    c.bench_function("score_for (200 roads)", |b| {
        b.iter(|| score_for(black_box(&roads), black_box(Category::Roads)))
    });

    // Grow then shrink a selection one item at a time, as a picker would.
    c.bench_function("record_selection delta walk (60 steps)", |b| {
        b.iter(|| {
            let mut store = SelectionStore::new(5);
            for n in (0..=30).chain((0..30).rev()) {
                let _ = store.record_selection(0, Category::Roads, black_box(&roads[..n]), None);
            }
            black_box(store.score(0))
        })
    });

    let mut store = SelectionStore::new(5);
    for player in 0..5 {
        let start = player * 20;
        let _ = store.record_selection(player, Category::Roads, &roads[start..start + 20], None);
    }
    c.bench_function("filter_available (100 taken)", |b| {
        b.iter(|| {
            let taken = store.taken_items(UniquenessScope::Global, 0);
            filter_available(black_box(&catalog.roads), taken)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
