//! Read-only lookup tables consumed by the hit resolvers, and host-side
//! helpers for building and validating them.

mod builder;
mod geometry_info;
mod tables;
pub mod transform;
mod vertex;

pub use builder::SceneBuilder;
pub use geometry_info::GeometryInfo;
pub use tables::{SceneTables, BARYCENTRIC_TOLERANCE};
pub use transform::Transform;
pub use vertex::Vertex;
