use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use glam::{Vec2, Vec3};
use hit_geometry::demo::{self, DemoScene};
use hit_geometry::{
    DefaultPrimitive, HitGeometryAlphaTestResolver, HitGeometryResolver, IntersectionRecord,
    PrimitiveKind, PrimitiveType, SceneTables, Spheres, Triangles,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PrimitiveArg {
    Triangle,
    Sphere,
}

/// Resolve one intersection record against the built-in demo scene.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Primitive kind to resolve (defaults to the one this build was configured for)
    #[arg(long, value_enum)]
    primitive: Option<PrimitiveArg>,

    /// Instance custom index (defaults to the demo floor or sphere)
    #[arg(long)]
    instance: Option<u32>,

    #[arg(long, default_value_t = 0)]
    geometry_index: u32,

    #[arg(long, default_value_t = 0)]
    primitive_id: u32,

    /// Barycentrics as u,v
    #[arg(long, value_delimiter = ',', default_values_t = [0.25, 0.25])]
    bary: Vec<f32>,

    /// World ray origin as x,y,z
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [0.0, 10.0, 0.0])]
    origin: Vec<f32>,

    /// World ray direction as x,y,z
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [0.0, -1.0, 0.0])]
    direction: Vec<f32>,

    /// Hit distance along the ray
    #[arg(long, default_value_t = 6.0)]
    t: f32,
}

impl Args {
    fn record(&self, demo: &DemoScene, kind: PrimitiveType) -> Result<IntersectionRecord> {
        ensure!(self.bary.len() == 2, "--bary expects 2 values, got {}", self.bary.len());
        ensure!(self.origin.len() == 3, "--origin expects 3 values, got {}", self.origin.len());
        ensure!(self.direction.len() == 3, "--direction expects 3 values, got {}", self.direction.len());

        let instance = self.instance.unwrap_or(match kind {
            PrimitiveType::Triangle => demo.floor,
            PrimitiveType::Sphere => demo.sphere,
        });

        Ok(IntersectionRecord {
            primitive_id: self.primitive_id,
            instance_custom_index: instance,
            geometry_index: self.geometry_index,
            barycentrics: Vec2::from_slice(&self.bary),
            world_ray_origin: Vec3::from_slice(&self.origin),
            world_ray_direction: Vec3::from_slice(&self.direction),
            hit_t: self.t,
        })
    }
}

fn probe<P: PrimitiveKind>(tables: SceneTables<'_>, record: &IntersectionRecord) -> Result<()> {
    tables.check_intersection(record, P::TYPE)?;
    log::debug!("Resolving {:?} as {}", record, P::TYPE);

    let hit = HitGeometryResolver::<P>::new(tables).resolve(record);
    let alpha = HitGeometryAlphaTestResolver::<P>::new(tables).resolve(record);

    println!("primitive:        {}", P::TYPE);
    println!("geometry id:      {}", hit.geometry_id);
    println!("material id:      {}", hit.material_id);
    println!("light id:         {}", hit.light_id);
    println!("world position:   {}", hit.world_position);
    println!("uv:               {}", hit.uv);
    println!("geometry normal:  {} (unflipped {})", hit.geometry_normal, hit.geometry_normal_unflipped);
    println!("tangent:          {}", hit.tangent());
    println!("bitangent:        {}", hit.bitangent());
    println!("shading normal:   {}", hit.shading_normal());
    println!("alpha-test uv:    {} (material {})", alpha.uv, alpha.material_id);

    if alpha.uv != hit.uv || alpha.material_id != hit.material_id {
        log::warn!("Alpha-test resolver disagrees with the full resolver");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let kind = match args.primitive {
        Some(PrimitiveArg::Triangle) => PrimitiveType::Triangle,
        Some(PrimitiveArg::Sphere) => PrimitiveType::Sphere,
        None => DefaultPrimitive::TYPE,
    };

    let demo = demo::create_demo_scene();
    let tables = demo.builder.tables();
    tables.validate()?;

    let record = args.record(&demo, kind)?;
    match kind {
        PrimitiveType::Triangle => probe::<Triangles>(tables, &record),
        PrimitiveType::Sphere => probe::<Spheres>(tables, &record),
    }
}
