// Criterion benchmarks for Ember Match

use std::sync::Arc;

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ember_match::core::MatchEngine;
use ember_match::models::{Gender, Preferences, Profile};
use ember_match::store::{MemoryStore, Repository};

fn create_candidate(id: usize) -> Profile {
    Profile {
        user_id: format!("user-{}", id),
        name: format!("User {}", id),
        age: 20 + (id % 30) as u8,
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        location: "Berlin".to_string(),
        bio: String::new(),
        interests: vec!["climbing".to_string()],
        photo_ids: vec![],
        preferences: Preferences::new(18, 99, 50, vec![]).unwrap(),
        created_at: Utc::now(),
    }
}

fn seeded_engine(pool_size: usize) -> MatchEngine<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    let engine = MatchEngine::new(store);

    let requester = Profile {
        user_id: "requester".to_string(),
        name: "Requester".to_string(),
        age: 30,
        gender: Gender::Male,
        location: "Berlin".to_string(),
        bio: String::new(),
        interests: vec![],
        photo_ids: vec![],
        preferences: Preferences::new(25, 35, 50, vec![Gender::Female]).unwrap(),
        created_at: Utc::now(),
    };
    engine.repository().append_profile(requester).unwrap();

    for i in 0..pool_size {
        engine.repository().append_profile(create_candidate(i)).unwrap();
    }

    // Some prior interactions so the exclusion scan has work to do
    for i in (0..pool_size).step_by(10) {
        let _ = engine.register_like("requester", &format!("user-{}", i));
    }

    engine
}

fn bench_potential_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("potential_matches");

    for pool_size in [100, 1_000, 10_000] {
        let engine = seeded_engine(pool_size);
        group.bench_with_input(
            BenchmarkId::from_parameter(pool_size),
            &pool_size,
            |b, _| {
                b.iter(|| engine.potential_matches(black_box("requester"), black_box(10)));
            },
        );
    }

    group.finish();
}

fn bench_register_like(c: &mut Criterion) {
    let engine = seeded_engine(1_000);

    c.bench_function("register_like_one_sided", |b| {
        b.iter(|| {
            // Same directed pair every iteration; the store dedupes
            engine
                .register_like(black_box("requester"), black_box("user-1"))
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_potential_matches, bench_register_like);
criterion_main!(benches);
