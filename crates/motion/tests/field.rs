use std::f32::consts::TAU;

use motion::{sun_position, BodyField, Look, Updatable, BODY_COUNT, PALETTE, ROTATION_STEP};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn generated_field_has_the_advertised_body_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let field = BodyField::generate(BODY_COUNT, &mut rng);
    assert_eq!(field.bodies.len(), 100);
    assert_eq!(field.rotation, 0.0);
}

#[test]
fn rotation_accumulates_a_fixed_step_per_call() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut steady = BodyField::generate(4, &mut rng);
    let mut jittery = steady.clone();

    for n in 0..250 {
        steady.update(0.0);
        // Wildly varying clock values must not affect the spin.
        jittery.update(n as f32 * 313.7);
    }

    let expected = (250.0 * ROTATION_STEP) % TAU;
    assert!((steady.rotation - expected).abs() < 1e-4, "steady={}", steady.rotation);
    assert!((jittery.rotation - expected).abs() < 1e-4, "jittery={}", jittery.rotation);
}

#[test]
fn rotation_wraps_into_one_turn() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = BodyField::generate(1, &mut rng);
    for _ in 0..700 {
        field.update(0.0);
    }
    assert!(field.rotation >= 0.0 && field.rotation < TAU);
    assert!((field.rotation - (7.0 - TAU)).abs() < 1e-3, "rotation={}", field.rotation);
}

#[test]
fn spawn_parameters_respect_their_ranges() {
    let mut rng = StdRng::seed_from_u64(4);
    let field = BodyField::generate(BODY_COUNT, &mut rng);
    for body in &field.bodies {
        assert!(body.r >= 1.0 && body.r < 1.5, "r={}", body.r);
        assert!(body.theta >= 0.0 && body.theta < TAU);
        assert!(body.phi >= 0.0 && body.phi < TAU);
        assert!(body.speed >= 0.001 && body.speed < 0.003, "speed={}", body.speed);
        assert!(
            body.amplitude >= 0.25 && body.amplitude < 0.75,
            "amplitude={}",
            body.amplitude
        );
        assert!((body.orientation.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn both_looks_appear_and_toon_tints_come_from_the_palette() {
    let mut rng = StdRng::seed_from_u64(5);
    let field = BodyField::generate(BODY_COUNT, &mut rng);

    let mut toon = 0;
    let mut glass = 0;
    for body in &field.bodies {
        match body.look {
            Look::Toon { color } => {
                toon += 1;
                let from_palette = PALETTE.iter().any(|entry| {
                    let expected = motion::palette::srgb(*entry);
                    color
                        .iter()
                        .zip(expected.iter())
                        .all(|(a, b)| (a - b).abs() < 1e-6)
                });
                assert!(from_palette, "tint {color:?} not in the palette");
            }
            Look::Glass => glass += 1,
        }
    }
    assert!(toon > 20, "only {toon} toon bodies out of 100");
    assert!(glass > 20, "only {glass} glass bodies out of 100");
}

#[test]
fn equal_seeds_give_equal_fields() {
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let mut field_a = BodyField::generate(BODY_COUNT, &mut rng_a);
    let mut field_b = BodyField::generate(BODY_COUNT, &mut rng_b);
    assert_eq!(field_a, field_b);

    field_a.update(333.0);
    field_b.update(333.0);
    assert_eq!(field_a, field_b);
}

#[test]
fn respawn_replaces_bodies_and_restarts_spin() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut field = BodyField::generate(BODY_COUNT, &mut rng);
    field.update(100.0);
    let before = field.bodies.clone();

    field.respawn(&mut rng);
    assert_eq!(field.bodies.len(), before.len());
    assert_eq!(field.rotation, 0.0);
    assert_ne!(field.bodies, before);
}

#[test]
fn sun_rides_a_radius_two_circle_in_the_xy_plane() {
    for i in 0..1_000 {
        let t = i as f32 * 37.0;
        let sun = sun_position(t);
        let planar = (sun.x * sun.x + sun.y * sun.y).sqrt();
        assert!((planar - 2.0).abs() < 1e-4, "radius {planar} at t={t}");
        assert_eq!(sun.z, 0.0);
    }
}

#[test]
fn sun_starts_at_the_top_of_its_circle() {
    let sun = sun_position(0.0);
    assert!(sun.x.abs() < 1e-6);
    assert!((sun.y - 2.0).abs() < 1e-6);
}
