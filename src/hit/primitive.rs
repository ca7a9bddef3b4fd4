use glam::{Mat3, Vec2, Vec3};

use super::IntersectionRecord;
use crate::scene::{GeometryInfo, SceneTables};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Triangle,
    Sphere,
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimitiveType::Triangle => write!(f, "triangle"),
            PrimitiveType::Sphere => write!(f, "sphere"),
        }
    }
}

/// Geometry-dependent part of a resolved hit; ids are filled in by the resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    pub world_position: Vec3,
    pub uv: Vec2,
    pub tangent_frame: Mat3,
    pub geometry_normal: Vec3,
    pub geometry_normal_unflipped: Vec3,
}

/// Compile-time strategy for one primitive representation.
///
/// Resolvers are generic over this trait so the primitive branch is chosen
/// once per build rather than per intersection. Implementors must derive
/// `surface_uv` and the `uv` of `surface` from the same routine.
pub trait PrimitiveKind: Copy + Default + Send + Sync + 'static {
    const TYPE: PrimitiveType;

    /// Full shading geometry for `record`, which hit geometry `info`.
    fn surface(
        tables: &SceneTables<'_>,
        info: &GeometryInfo,
        record: &IntersectionRecord,
    ) -> SurfaceGeometry;

    /// Texture coordinates only, bit-identical to `surface(..).uv`.
    fn surface_uv(
        tables: &SceneTables<'_>,
        info: &GeometryInfo,
        record: &IntersectionRecord,
    ) -> Vec2;
}
