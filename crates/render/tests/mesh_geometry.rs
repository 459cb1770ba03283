use glam::Vec3;
use render::{color, mesh};

#[test]
fn icosphere_vertex_count_grows_four_to_one_per_subdivision() {
    for subdivisions in 0..3 {
        let verts = mesh::icosphere(1.0, subdivisions);
        let faces = 20 * 4usize.pow(subdivisions);
        assert_eq!(verts.len(), faces * 3);
    }
}

#[test]
fn body_meshes_sit_on_their_radius() {
    for v in mesh::icosphere(mesh::BODY_RADIUS, 2) {
        let len = Vec3::from(v.position).length();
        assert!((len - mesh::BODY_RADIUS).abs() < 1e-5, "len={len}");
    }
    for v in mesh::icosahedron(mesh::BODY_RADIUS) {
        let len = Vec3::from(v.position).length();
        assert!((len - mesh::BODY_RADIUS).abs() < 1e-5, "len={len}");
    }
}

#[test]
fn smooth_normals_are_unit_and_radial() {
    for v in mesh::icosphere(mesh::BODY_RADIUS, 2) {
        let normal = Vec3::from(v.normal);
        assert!((normal.length() - 1.0).abs() < 1e-5);
        let outward = Vec3::from(v.position).normalize();
        assert!(normal.dot(outward) > 0.9999, "normal is not radial: {normal}");
    }
}

#[test]
fn faceted_normals_are_flat_and_outward() {
    let verts = mesh::icosahedron(1.0);
    assert_eq!(verts.len(), 60);
    for face in verts.chunks(3) {
        assert_eq!(face[0].normal, face[1].normal);
        assert_eq!(face[0].normal, face[2].normal);
        let normal = Vec3::from(face[0].normal);
        assert!((normal.length() - 1.0).abs() < 1e-5);
        let centroid = (Vec3::from(face[0].position)
            + Vec3::from(face[1].position)
            + Vec3::from(face[2].position))
            / 3.0;
        assert!(normal.dot(centroid) > 0.0, "normal points inward");
    }
}

#[test]
fn background_faces_point_inward() {
    let verts = mesh::background_sphere(mesh::BACKGROUND_RADIUS);
    for face in verts.chunks(3) {
        let a = Vec3::from(face[0].position);
        let b = Vec3::from(face[1].position);
        let c = Vec3::from(face[2].position);
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) < 0.0, "face is wound outward");
    }
}

#[test]
fn background_is_black_behind_and_blue_in_front() {
    let verts = mesh::background_sphere(mesh::BACKGROUND_RADIUS);
    let mut tinted = 0;
    for v in &verts {
        // Hue 0.565 at half saturation, lightness from the vertex's own depth.
        let expected = color::to_linear(color::hsl_to_srgb(0.565, 0.5, -v.position[2] * 0.05));
        for (got, want) in v.color.into_iter().zip(expected) {
            assert!(
                (got - want).abs() < 1e-6,
                "z={} color={:?}",
                v.position[2],
                v.color
            );
        }
        if v.position[2] > 0.1 {
            assert_eq!(v.color, [0.0, 0.0, 0.0], "z={}", v.position[2]);
        }
        if v.position[2] < -1.0 {
            assert!(
                v.color[2] > v.color[1] && v.color[1] > v.color[0],
                "color={:?}",
                v.color
            );
            tinted += 1;
        }
    }
    assert!(tinted > 0);
}

#[test]
fn background_brightens_toward_the_camera_side() {
    let verts = mesh::background_sphere(mesh::BACKGROUND_RADIUS);
    let near = verts
        .iter()
        .min_by(|a, b| a.position[2].partial_cmp(&b.position[2]).unwrap())
        .unwrap();
    let far = verts
        .iter()
        .max_by(|a, b| a.position[2].partial_cmp(&b.position[2]).unwrap())
        .unwrap();
    assert!(near.color[2] > far.color[2]);
}
