use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sarica_core::taxonomy::UserClass;
use sarica_essence::{affinity_to_grade, Essence};

fn bench_award(c: &mut Criterion) {
    c.bench_function("award_all_categories", |b| {
        b.iter(|| {
            let mut essence = Essence::new();
            for (i, class) in UserClass::ALL.iter().enumerate() {
                essence.award(*class, black_box(i as i64 * 50));
            }
            essence
        })
    });

    c.bench_function("replay_ledger", |b| {
        let ledger: Vec<(UserClass, i64)> = UserClass::ALL
            .iter()
            .map(|class| (*class, 10_000))
            .collect();
        b.iter(|| Essence::from_ledger(black_box(ledger.clone())))
    });

    c.bench_function("affinity_to_grade", |b| {
        b.iter(|| affinity_to_grade(black_box(1234.5)))
    });
}

criterion_group!(benches, bench_award);
criterion_main!(benches);
