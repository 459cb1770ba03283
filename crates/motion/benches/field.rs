use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motion::{BodyField, Updatable, BODY_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field_update(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = BodyField::generate(BODY_COUNT, &mut rng);
    let mut t = 0.0_f32;
    c.bench_function("field_update_100_bodies", |b| {
        b.iter(|| {
            t += 16.6;
            field.update(black_box(t));
        });
    });
}

criterion_group!(benches, field_update);
criterion_main!(benches);
