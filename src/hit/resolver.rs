use std::marker::PhantomData;

use super::{HitGeometry, HitGeometryAlphaTest, IntersectionRecord, PrimitiveKind};
use crate::scene::SceneTables;
use crate::DefaultPrimitive;

/// Reconstructs full shading geometry for intersections with primitives of kind `P`.
///
/// Holds only borrowed tables, so one resolver can be shared freely across
/// threads. Invalid ids or degenerate input are the caller's responsibility;
/// see [`SceneTables::check_intersection`].
#[derive(Clone, Copy, Debug)]
pub struct HitGeometryResolver<'a, P: PrimitiveKind = DefaultPrimitive> {
    tables: SceneTables<'a>,
    _kind: PhantomData<P>,
}

impl<'a, P: PrimitiveKind> HitGeometryResolver<'a, P> {
    pub fn new(tables: SceneTables<'a>) -> Self {
        Self {
            tables,
            _kind: PhantomData,
        }
    }

    pub fn tables(&self) -> SceneTables<'a> {
        self.tables
    }

    pub fn resolve(&self, record: &IntersectionRecord) -> HitGeometry {
        let geometry_id = record.geometry_id();
        let info = self.tables.geometry(geometry_id);
        let surface = P::surface(&self.tables, info, record);

        HitGeometry {
            world_position: surface.world_position,
            material_id: info.material_id,
            geometry_normal: surface.geometry_normal,
            light_id: info.light_id,
            uv: surface.uv,
            geometry_id,
            tangent_frame: surface.tangent_frame,
            geometry_normal_unflipped: surface.geometry_normal_unflipped,
        }
    }
}

/// Reconstructs only uv and material id, for any-hit opacity tests.
#[derive(Clone, Copy, Debug)]
pub struct HitGeometryAlphaTestResolver<'a, P: PrimitiveKind = DefaultPrimitive> {
    tables: SceneTables<'a>,
    _kind: PhantomData<P>,
}

impl<'a, P: PrimitiveKind> HitGeometryAlphaTestResolver<'a, P> {
    pub fn new(tables: SceneTables<'a>) -> Self {
        Self {
            tables,
            _kind: PhantomData,
        }
    }

    pub fn resolve(&self, record: &IntersectionRecord) -> HitGeometryAlphaTest {
        let info = self.tables.geometry(record.geometry_id());
        HitGeometryAlphaTest {
            uv: P::surface_uv(&self.tables, info, record),
            material_id: info.material_id,
        }
    }
}
