use glam::Mat4;

use super::{GeometryInfo, SceneTables, Vertex};

/// Packs meshes and sphere instances into the flat tables the resolvers read.
///
/// Each added geometry gets its own `GeometryInfo` entry; the returned id is
/// the `instance_custom_index + geometry_index` an intersection must carry to
/// address it.
#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    geometry_infos: Vec<GeometryInfo>,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an indexed triangle mesh. `indices` are local to `vertices`.
    pub fn add_mesh(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
        object_to_world: Mat4,
        material_id: u32,
        light_id: u32,
    ) -> u32 {
        debug_assert!(indices.len() % 3 == 0, "index count must be a multiple of 3");
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "mesh index out of range"
        );

        let geometry_id = self.geometry_infos.len() as u32;
        let info = GeometryInfo::from_matrix(
            object_to_world,
            material_id,
            light_id,
            self.indices.len() as u32,
            self.vertices.len() as u32,
        );

        self.vertices.extend_from_slice(vertices);
        self.indices.extend_from_slice(indices);
        self.geometry_infos.push(info);

        log::debug!(
            "Added mesh geometry {}: {} vertices, {} triangles, material {}",
            geometry_id,
            vertices.len(),
            indices.len() / 3,
            material_id
        );
        geometry_id
    }

    /// Appends an analytic sphere: the unit sphere at the origin placed by `object_to_world`.
    pub fn add_sphere(&mut self, object_to_world: Mat4, material_id: u32, light_id: u32) -> u32 {
        let geometry_id = self.geometry_infos.len() as u32;
        let info = GeometryInfo::from_matrix(
            object_to_world,
            material_id,
            light_id,
            self.indices.len() as u32,
            self.vertices.len() as u32,
        );
        self.geometry_infos.push(info);

        log::debug!("Added sphere geometry {}: material {}", geometry_id, material_id);
        geometry_id
    }

    /// Mutable access to an already added entry, e.g. to override its ids.
    pub fn geometry_mut(&mut self, geometry_id: u32) -> Option<&mut GeometryInfo> {
        self.geometry_infos.get_mut(geometry_id as usize)
    }

    pub fn geometry_count(&self) -> usize {
        self.geometry_infos.len()
    }

    pub fn tables(&self) -> SceneTables<'_> {
        SceneTables::new(&self.geometry_infos, &self.vertices, &self.indices)
    }
}
