//! Benchmarks for ranking and filtering
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic outfield catalog about the size of the real one.

use catalog::{Catalog, Player, Population, PreferredFoot};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{FilterSpec, FootFilter, PositionComparison, Ranker};
use similarity::rank_candidates;
use std::sync::Arc;

const CATALOG_SIZE: usize = 2500;
const LEAGUES: [&str; 5] = ["Premier League", "La Liga", "Serie A", "Bundesliga", "Ligue 1"];
const POSITIONS: [&str; 4] = ["FW", "MF", "DF", "FW,MF"];

fn build_test_catalog() -> Arc<Catalog> {
    let players = (0..CATALOG_SIZE)
        .map(|i| Player {
            key: format!("Player {i}"),
            name: format!("Player {i}"),
            club: format!("Club {}", i % 98),
            position: POSITIONS[i % POSITIONS.len()].to_string(),
            league: LEAGUES[i % LEAGUES.len()].to_string(),
            age: 16 + (i % 25) as u8,
            foot: if i % 4 == 0 {
                Some(PreferredFoot::Left)
            } else {
                Some(PreferredFoot::Right)
            },
        })
        .collect();
    Arc::new(Catalog::from_players(Population::Outfield, players).expect("Failed to build catalog"))
}

fn build_test_scores() -> Vec<f32> {
    (0..CATALOG_SIZE)
        .map(|i| ((i * 7919) % 10007) as f32 / 10007.0)
        .collect()
}

fn bench_rank_candidates(c: &mut Criterion) {
    let scores = build_test_scores();

    c.bench_function("rank_candidates", |b| {
        b.iter(|| {
            let candidates = rank_candidates(black_box(&scores));
            black_box(candidates)
        })
    });
}

fn bench_recommend_unfiltered(c: &mut Criterion) {
    let ranker = Ranker::new(build_test_catalog());
    let scores = build_test_scores();
    let spec = FilterSpec::new();

    c.bench_function("recommend_unfiltered", |b| {
        b.iter(|| {
            let rows = ranker
                .recommend(black_box("Player 42"), &scores, Population::Outfield, &spec)
                .unwrap();
            black_box(rows)
        })
    });
}

fn bench_recommend_all_filters(c: &mut Criterion) {
    let ranker = Ranker::new(build_test_catalog());
    let scores = build_test_scores();
    let spec = FilterSpec::new()
        .with_league("Serie A")
        .with_preferred_foot(FootFilter::Automatic)
        .with_position_comparison(PositionComparison::SamePosition)
        .with_age_range((20, 32))
        .with_result_count(5);

    c.bench_function("recommend_all_filters", |b| {
        b.iter(|| {
            let rows = ranker
                .recommend(black_box("Player 42"), &scores, Population::Outfield, &spec)
                .unwrap();
            black_box(rows)
        })
    });
}

criterion_group!(
    benches,
    bench_rank_candidates,
    bench_recommend_unfiltered,
    bench_recommend_all_filters
);
criterion_main!(benches);
