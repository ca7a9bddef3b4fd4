use glam::{Vec2, Vec3};

use crate::{SceneBuilder, Transform, Vertex};

/// Light id for geometry that is not an emitter.
pub const NO_LIGHT: u32 = u32::MAX;

pub const FLOOR_MATERIAL: u32 = 0;
pub const MIRRORED_FLOOR_MATERIAL: u32 = 1;
pub const SPHERE_MATERIAL: u32 = 2;
pub const SPHERE_LIGHT: u32 = 0;

/// Small built-in scene used by the probe binary and the tests.
pub struct DemoScene {
    pub builder: SceneBuilder,
    pub floor: u32,
    pub mirrored_floor: u32,
    pub sphere: u32,
}

/// 20x20 floor quad in the xz plane facing +y, two triangles.
pub fn floor_mesh() -> (Vec<Vertex>, Vec<u32>) {
    let up = Vec3::Y;
    let tangent = Vec3::X;
    let vertices = vec![
        Vertex::new(Vec3::new(-10.0, 0.0, -10.0), up, tangent, Vec2::new(0.0, 0.0)),
        Vertex::new(Vec3::new(10.0, 0.0, -10.0), up, tangent, Vec2::new(1.0, 0.0)), // One full texture repeat across 20 meters
        Vertex::new(Vec3::new(10.0, 0.0, 10.0), up, tangent, Vec2::new(1.0, 1.0)),
        Vertex::new(Vec3::new(-10.0, 0.0, 10.0), up, tangent, Vec2::new(0.0, 1.0)),
    ];

    let indices = vec![0, 2, 1, 0, 3, 2];
    (vertices, indices)
}

pub fn create_demo_scene() -> DemoScene {
    let mut builder = SceneBuilder::new();
    let (floor_vertices, floor_indices) = floor_mesh();

    // Floor with identity transform
    let floor = builder.add_mesh(
        &floor_vertices,
        &floor_indices,
        Transform::new().to_matrix(),
        FLOOR_MATERIAL,
        NO_LIGHT,
    );

    // Same quad mirrored along x, off to the side
    let mirrored = Transform::at(Vec3::new(30.0, 0.0, 0.0)).with_scale(Vec3::new(-1.0, 1.0, 1.0));
    let mirrored_floor = builder.add_mesh(
        &floor_vertices,
        &floor_indices,
        mirrored.to_matrix(),
        MIRRORED_FLOOR_MATERIAL,
        NO_LIGHT,
    );

    // Emissive sphere of radius 2 resting on the floor
    let sphere = builder.add_sphere(
        Transform::at(Vec3::new(0.0, 2.0, 0.0)).with_scale(Vec3::splat(2.0)).to_matrix(),
        SPHERE_MATERIAL,
        SPHERE_LIGHT,
    );

    DemoScene {
        builder,
        floor,
        mirrored_floor,
        sphere,
    }
}
