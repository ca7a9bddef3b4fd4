use std::ops::{Add, Mul};

use glam::{Vec2, Vec3};

use super::{IntersectionRecord, PrimitiveKind, PrimitiveType, SurfaceGeometry};
use crate::math::{build_tangent_to_world, face_forward};
use crate::scene::{GeometryInfo, SceneTables, Vertex, BARYCENTRIC_TOLERANCE};

/// Indexed triangle meshes addressed through `index_offset` / `vertex_offset`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Triangles;

/// The three vertices of the hit triangle together with their barycentric weights.
struct TriangleHit<'a> {
    vertices: [&'a Vertex; 3],
    weights: Vec3,
}

impl<'a> TriangleHit<'a> {
    #[inline]
    fn fetch(tables: &SceneTables<'a>, info: &GeometryInfo, record: &IntersectionRecord) -> Self {
        let weights = record.barycentric_weights();
        debug_assert!(
            weights.min_element() >= -BARYCENTRIC_TOLERANCE,
            "barycentrics {:?} outside triangle {}",
            record.barycentrics,
            record.primitive_id
        );

        let [i0, i1, i2] = tables.triangle_indices(info, record.primitive_id);
        Self {
            vertices: [tables.vertex(info, i0), tables.vertex(info, i1), tables.vertex(info, i2)],
            weights,
        }
    }

    #[inline]
    fn interpolate<T>(&self, attribute: impl Fn(&Vertex) -> T) -> T
    where
        T: Mul<f32, Output = T> + Add<Output = T>,
    {
        let [v0, v1, v2] = self.vertices;
        blend([attribute(v0), attribute(v1), attribute(v2)], self.weights)
    }

    #[inline]
    fn uv(&self) -> Vec2 {
        self.interpolate(Vertex::tex_coords)
    }
}

#[inline]
fn blend<T>(values: [T; 3], weights: Vec3) -> T
where
    T: Mul<f32, Output = T> + Add<Output = T>,
{
    let [a, b, c] = values;
    a * weights.x + b * weights.y + c * weights.z
}

impl PrimitiveKind for Triangles {
    const TYPE: PrimitiveType = PrimitiveType::Triangle;

    fn surface(
        tables: &SceneTables<'_>,
        info: &GeometryInfo,
        record: &IntersectionRecord,
    ) -> SurfaceGeometry {
        let hit = TriangleHit::fetch(tables, info, record);
        let object_to_world = info.object_to_world();
        let linear = info.linear();
        let normal_matrix = info.normal_matrix();

        let position = hit.interpolate(Vertex::position);
        let world_position = object_to_world.transform_point3(position);

        let [p0, p1, p2] = hit.vertices.map(Vertex::position);
        let face = (p1 - p0).cross(p2 - p0);
        debug_assert!(face.length_squared() > 0.0, "degenerate triangle {}", record.primitive_id);
        let flat_normal = (normal_matrix * face).normalize();

        // Per-vertex normalization happens before blending so vertices with
        // larger transformed magnitudes do not dominate.
        let normals = hit.vertices.map(|v| (normal_matrix * v.normal()).normalize());
        let tangents = hit.vertices.map(|v| (linear * v.tangent()).normalize_or_zero());
        let normal = blend(normals, hit.weights);
        let tangent = blend(tangents, hit.weights);

        let ray_direction = record.world_ray_direction;
        let mut tangent_frame = build_tangent_to_world(tangent, info.odd_negative_scaling, normal);
        tangent_frame.z_axis = face_forward(tangent_frame.z_axis, ray_direction, flat_normal);

        SurfaceGeometry {
            world_position,
            uv: hit.uv(),
            tangent_frame,
            geometry_normal: face_forward(flat_normal, ray_direction, flat_normal),
            geometry_normal_unflipped: flat_normal,
        }
    }

    fn surface_uv(
        tables: &SceneTables<'_>,
        info: &GeometryInfo,
        record: &IntersectionRecord,
    ) -> Vec2 {
        TriangleHit::fetch(tables, info, record).uv()
    }
}
