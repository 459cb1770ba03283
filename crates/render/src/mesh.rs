//! Triangle meshes for the scene: body spheroids and the background shell.
//!
//! Everything is a non-indexed triangle list built from a subdivided
//! icosahedron. Toon bodies use smooth normals, glass bodies keep the raw
//! facets, and the background is a large inward-facing shell with a painted
//! vertical gradient.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::color;

/// Radius of every body mesh, smooth or faceted.
pub const BODY_RADIUS: f32 = 0.25;
/// Subdivision level of the smooth body sphere.
pub const BODY_SUBDIVISIONS: u32 = 4;
/// Radius of the background shell around the whole scene.
pub const BACKGROUND_RADIUS: f32 = 4.0;

/// Hue and saturation of the background gradient; lightness is painted from
/// the vertex height along the polar axis.
const BACKGROUND_HUE: f32 = 0.565;
const BACKGROUND_SATURATION: f32 = 0.5;
const BACKGROUND_LIGHTNESS_PER_UNIT: f32 = 0.05;
const BACKGROUND_SUBDIVISIONS: u32 = 3;

/// Vertex of a lit body mesh.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Vertex of the unlit background shell.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct BackgroundVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl BackgroundVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// The twenty unit-icosahedron triangles, wound counter-clockwise seen from
/// outside.
fn base_triangles() -> Vec<[Vec3; 3]> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let v: [Vec3; 12] = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    FACES
        .iter()
        .map(|f| {
            [
                v[f[0]].normalize(),
                v[f[1]].normalize(),
                v[f[2]].normalize(),
            ]
        })
        .collect()
}

/// Split each triangle into four, pushing midpoints back onto the unit sphere.
fn subdivide(triangles: Vec<[Vec3; 3]>) -> Vec<[Vec3; 3]> {
    let mut out = Vec::with_capacity(triangles.len() * 4);
    for [a, b, c] in triangles {
        let ab = ((a + b) * 0.5).normalize();
        let bc = ((b + c) * 0.5).normalize();
        let ca = ((c + a) * 0.5).normalize();
        out.push([a, ab, ca]);
        out.push([ab, b, bc]);
        out.push([ca, bc, c]);
        out.push([ab, bc, ca]);
    }
    out
}

fn unit_sphere_triangles(subdivisions: u32) -> Vec<[Vec3; 3]> {
    let mut tris = base_triangles();
    for _ in 0..subdivisions {
        tris = subdivide(tris);
    }
    tris
}

/// Smooth sphere: subdivided icosahedron with per-vertex normals equal to the
/// normalized position.
pub fn icosphere(radius: f32, subdivisions: u32) -> Vec<Vertex> {
    let tris = unit_sphere_triangles(subdivisions);
    let mut verts = Vec::with_capacity(tris.len() * 3);
    for tri in tris {
        for p in tri {
            verts.push(Vertex {
                position: (p * radius).to_array(),
                normal: p.to_array(),
            });
        }
    }
    verts
}

/// Faceted solid: the raw twenty-face icosahedron with flat normals.
pub fn icosahedron(radius: f32) -> Vec<Vertex> {
    let mut verts = Vec::with_capacity(60);
    for [a, b, c] in base_triangles() {
        let normal = (b - a).cross(c - a).normalize().to_array();
        for p in [a, b, c] {
            verts.push(Vertex {
                position: (p * radius).to_array(),
                normal,
            });
        }
    }
    verts
}

/// The gradient shell enclosing the scene.
///
/// Winding is reversed so the inside faces survive back-face culling; the
/// camera always sits inside it. Colors are converted to linear at build time
/// and never touched again.
pub fn background_sphere(radius: f32) -> Vec<BackgroundVertex> {
    let tris = unit_sphere_triangles(BACKGROUND_SUBDIVISIONS);
    let mut verts = Vec::with_capacity(tris.len() * 3);
    for [a, b, c] in tris {
        for p in [a, c, b] {
            let scaled = p * radius;
            let lightness = -scaled.z * BACKGROUND_LIGHTNESS_PER_UNIT;
            let srgb = color::hsl_to_srgb(BACKGROUND_HUE, BACKGROUND_SATURATION, lightness);
            verts.push(BackgroundVertex {
                position: scaled.to_array(),
                color: color::to_linear(srgb),
            });
        }
    }
    verts
}
