//! Shading-geometry reconstruction for ray/primitive intersections.
//!
//! Given an [`IntersectionRecord`] and the scene's read-only lookup tables,
//! [`HitGeometryResolver`] rebuilds world position, oriented normals, an
//! orthonormal tangent frame, uv and material/light ids.
//! [`HitGeometryAlphaTestResolver`] produces only uv and material id for
//! opacity tests, using the same uv routines.

pub mod demo;
pub mod hit;
pub mod math;
pub mod scene;

pub use hit::{
    HitGeometry, HitGeometryAlphaTest, HitGeometryAlphaTestResolver, HitGeometryResolver,
    IntersectionRecord, PrimitiveKind, PrimitiveType, Spheres, Triangles,
};
pub use scene::{GeometryInfo, SceneBuilder, SceneTables, Transform, Vertex};

cfg_if::cfg_if! {
    if #[cfg(feature = "sphere-primitives")] {
        /// Primitive representation this build resolves by default.
        pub type DefaultPrimitive = Spheres;
    } else {
        /// Primitive representation this build resolves by default.
        pub type DefaultPrimitive = Triangles;
    }
}
