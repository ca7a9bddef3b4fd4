use glam::{Vec2, Vec3};

use super::{IntersectionRecord, PrimitiveKind, PrimitiveType, SurfaceGeometry};
use crate::math::{create_frame, face_forward, sphere_uv};
use crate::scene::{GeometryInfo, SceneTables};

/// Analytic spheres: the object-space unit sphere at the origin, placed by
/// `object_to_world`.
///
/// The world radius is read off the transformed unit X axis, so spheres with
/// a non-uniform scale on Y or Z are not represented correctly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spheres;

/// World-space hit on an analytic sphere, snapped back onto its surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereHit {
    pub center: Vec3,
    pub radius: f32,
    pub hit_point: Vec3,
    pub normal: Vec3,
}

impl SphereHit {
    /// Re-projects the parametric hit point onto the sphere.
    ///
    /// `origin + direction * t` drifts off the surface at grazing angles, so
    /// only its direction from the center is kept.
    #[inline]
    pub fn reproject(info: &GeometryInfo, record: &IntersectionRecord) -> Self {
        let object_to_world = info.object_to_world();
        let center = object_to_world.transform_point3(Vec3::ZERO);
        let radius = (object_to_world.transform_point3(Vec3::X) - center).length();
        let hit_point = center + radius * (record.ray_point() - center).normalize();
        let normal = (hit_point - center).normalize();

        Self {
            center,
            radius,
            hit_point,
            normal,
        }
    }

    /// Equirectangular uv of the hit, measured in the sphere's own orientation.
    #[inline]
    pub fn uv(&self, info: &GeometryInfo) -> Vec2 {
        let local = (info.normal_matrix().transpose() * self.normal).normalize();
        sphere_uv(local)
    }
}

impl PrimitiveKind for Spheres {
    const TYPE: PrimitiveType = PrimitiveType::Sphere;

    fn surface(
        _tables: &SceneTables<'_>,
        info: &GeometryInfo,
        record: &IntersectionRecord,
    ) -> SurfaceGeometry {
        let hit = SphereHit::reproject(info, record);

        let mut tangent_frame = create_frame(hit.normal);
        let unflipped = tangent_frame.z_axis;
        tangent_frame.z_axis = face_forward(unflipped, record.world_ray_direction, unflipped);

        SurfaceGeometry {
            world_position: hit.hit_point,
            uv: hit.uv(info),
            tangent_frame,
            geometry_normal: tangent_frame.z_axis,
            geometry_normal_unflipped: unflipped,
        }
    }

    fn surface_uv(
        _tables: &SceneTables<'_>,
        info: &GeometryInfo,
        record: &IntersectionRecord,
    ) -> Vec2 {
        SphereHit::reproject(info, record).uv(info)
    }
}
