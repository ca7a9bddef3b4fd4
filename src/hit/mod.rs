//! Per-intersection shading geometry.
//!
//! ## Flow
//! ```text
//! IntersectionRecord -> geometry id -> GeometryInfo -> PrimitiveKind::surface -> HitGeometry
//! ```

mod geometry;
mod primitive;
mod record;
mod resolver;
mod sphere;
mod triangle;

pub use geometry::{HitGeometry, HitGeometryAlphaTest};
pub use primitive::{PrimitiveKind, PrimitiveType, SurfaceGeometry};
pub use record::IntersectionRecord;
pub use resolver::{HitGeometryAlphaTestResolver, HitGeometryResolver};
pub use sphere::{SphereHit, Spheres};
pub use triangle::Triangles;
