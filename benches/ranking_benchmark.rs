use carpool_rewards::models::UserSummary;
use carpool_rewards::services::ranking::{leaderboard, rank, rank_of, RankingMetric};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const POPULATION: usize = 10_000;

/// Build a population with heavy ties so the id tie-break is exercised.
fn make_users(count: usize) -> Vec<UserSummary> {
    (0..count)
        .map(|i| {
            let mut user = UserSummary::new(format!("user-{:05}", (i * 7919) % count));
            user.points = ((i * 31) % 200) as u64 * 25;
            user.rides_offered = (i % 60) as u32;
            user.rides_taken = ((i * 3) % 45) as u32;
            user.carbon_saved = ((i * 13) % 500) as f64 * 0.5;
            user
        })
        .collect()
}

fn benchmark_ranking(c: &mut Criterion) {
    let users = make_users(POPULATION);
    let target = users[POPULATION / 2].id.clone();

    let mut group = c.benchmark_group("ranking");

    for metric in RankingMetric::ALL {
        group.bench_function(format!("rank_{}", metric), |b| {
            b.iter(|| rank(black_box(&users), metric))
        });
    }

    group.bench_function("rank_of_points", |b| {
        b.iter(|| rank_of(black_box(&users), RankingMetric::Points, &target))
    });

    group.bench_function("leaderboard_top_50", |b| {
        b.iter(|| leaderboard(black_box(&users), RankingMetric::Carbon, 50))
    });

    group.finish();
}

criterion_group!(benches, benchmark_ranking);
criterion_main!(benches);
