use criterion::{criterion_group, criterion_main, Criterion, black_box};
use esgen_core::{go_literal, sample_enum_set, MembershipProbability};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate(c: &mut Criterion) {
    let p = MembershipProbability::default();
    let mut rng = StdRng::seed_from_u64(0);
    let es = sample_enum_set(&mut rng, 4096, p);
    c.bench_function("sample_4096", |b| b.iter(|| black_box(sample_enum_set(&mut rng, 4096, p))));
    c.bench_function("render_4096", |b| b.iter(|| black_box(go_literal(&es))));
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
