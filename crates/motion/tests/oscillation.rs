use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use motion::{Body, Look, Updatable};

fn reference_body() -> Body {
    Body {
        r: 1.2,
        theta: 0.0,
        phi: FRAC_PI_2,
        speed: 0.002,
        amplitude: 0.5,
        look: Look::Glass,
        orientation: Quat::IDENTITY,
        position: Vec3::ZERO,
    }
}

#[test]
fn radius_at_time_zero_is_the_base_radius() {
    let body = reference_body();
    assert!((body.radius_at(0.0) - body.r).abs() < 1e-6);
}

#[test]
fn radius_stays_within_the_oscillation_band() {
    let body = reference_body();
    let lo = body.r - body.amplitude.abs();
    let hi = body.r + body.amplitude.abs();
    for i in 0..20_000 {
        let t = i as f32 * 7.3;
        let radius = body.radius_at(t);
        assert!(
            radius >= lo - 1e-4 && radius <= hi + 1e-4,
            "radius {radius} escaped [{lo}, {hi}] at t={t}"
        );
    }
}

#[test]
fn distance_from_origin_matches_the_oscillated_radius() {
    let mut body = reference_body();
    body.theta = 1.1;
    body.phi = 2.3;
    for i in 0..2_000 {
        let t = i as f32 * 16.6;
        body.update(t);
        let expected = body.radius_at(t).abs();
        let got = body.position.length();
        assert!(
            (got - expected).abs() < 1e-4,
            "norm {got} vs radius {expected} at t={t}"
        );
    }
}

#[test]
fn update_is_idempotent_for_a_fixed_time() {
    let mut body = reference_body();
    body.update(1234.5);
    let first = body.position;
    body.update(1234.5);
    assert_eq!(first, body.position);
}

#[test]
fn update_touches_nothing_but_position() {
    let mut body = reference_body();
    let before = body;
    body.update(987.0);
    assert_eq!(before.r, body.r);
    assert_eq!(before.theta, body.theta);
    assert_eq!(before.phi, body.phi);
    assert_eq!(before.speed, body.speed);
    assert_eq!(before.amplitude, body.amplitude);
    assert_eq!(before.look, body.look);
    assert_eq!(before.orientation, body.orientation);
}

// r=1.2, theta=0, phi=pi/2, speed=0.002, amplitude=0.5 at t=500:
// radius = sin(1.0) * 0.5 + 1.2 = 1.6207, position = (radius, 0, 0).
#[test]
fn worked_example_lands_where_expected() {
    let mut body = reference_body();
    body.update(500.0);
    assert!((body.position.x - 1.6207).abs() < 1e-3, "x={}", body.position.x);
    assert!(body.position.y.abs() < 1e-4, "y={}", body.position.y);
    assert!(body.position.z.abs() < 1e-4, "z={}", body.position.z);
}

#[test]
fn negative_amplitude_keeps_the_same_band() {
    let mut body = reference_body();
    body.amplitude = -0.5;
    for i in 0..2_000 {
        let t = i as f32 * 11.0;
        let radius = body.radius_at(t);
        assert!(radius >= 0.7 - 1e-4 && radius <= 1.7 + 1e-4, "radius {radius} at t={t}");
    }
}
