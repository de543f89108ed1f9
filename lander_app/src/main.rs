//! Lander Terrain Probe
//!
//! Headless driver for the terrain octree:
//! - Generates a procedural heightfield and indexes its vertices
//! - Picks a vertex with a camera ray
//! - Drops a lander box onto the terrain, sensing altitude on the way down and
//!   bouncing off when its bottom corners enter a leaf
//! - Reports what each debug display mode would draw
//!
//! Usage: `lander_probe [settings.toml|settings.ron]`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use terrain_octree::foundation::logging;
use terrain_octree::foundation::math::{utils, Point3, Vec3};
use terrain_octree::foundation::time::Stopwatch;
use terrain_octree::physics::sensing::{self, AltitudeSample};
use terrain_octree::prelude::*;

// Terrain settings
const GRID_SIZE: usize = 48;
const GRID_SPACING: f32 = 2.0;
const LATTICE_CELLS: usize = 6;
const MAX_HEIGHT: f32 = 12.0;
const TERRAIN_SEED: u64 = 0x1a4d_e125;

// Lander settings
const LANDER_EXTENTS: f32 = 1.5;
const START_HEIGHT: f32 = 80.0;
const GRAVITY: f32 = -9.8;
const RESTITUTION: f32 = 0.4;
const TIME_STEP: f32 = 1.0 / 60.0;
const MAX_STEPS: usize = 2_000;
const SETTLE_SPEED: f32 = 0.5;

// Debug colors by tree level
const LEVEL_COLORS: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "violet"];

/// Heightfield vertices laid out row-major in z, centered on the origin
///
/// Heights come from a coarse lattice of random values, bilinearly blended so
/// neighboring vertices stay close.
fn generate_terrain(seed: u64) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lattice: Vec<f32> = (0..(LATTICE_CELLS + 1) * (LATTICE_CELLS + 1))
        .map(|_| rng.gen_range(0.0..MAX_HEIGHT))
        .collect();
    let lattice_at = |i: usize, j: usize| lattice[j * (LATTICE_CELLS + 1) + i];

    let half = (GRID_SIZE - 1) as f32 * GRID_SPACING * 0.5;
    let cell = (GRID_SIZE - 1) as f32 / LATTICE_CELLS as f32;

    let mut points = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let u = col as f32 / cell;
            let v = row as f32 / cell;
            let (i, j) = ((u as usize).min(LATTICE_CELLS - 1), (v as usize).min(LATTICE_CELLS - 1));
            let (fu, fv) = (u - i as f32, v - j as f32);
            let near = utils::lerp(lattice_at(i, j), lattice_at(i + 1, j), fu);
            let far = utils::lerp(lattice_at(i, j + 1), lattice_at(i + 1, j + 1), fu);
            points.push(Point3::new(
                col as f32 * GRID_SPACING - half,
                utils::lerp(near, far, fv),
                row as f32 * GRID_SPACING - half,
            ));
        }
    }
    points
}

fn load_settings() -> Result<IndexSettings, ConfigError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => IndexSettings::load_from_file(&path)?,
        None => IndexSettings::default(),
    };
    settings.validate()?;
    Ok(settings)
}

fn report_index(index: &SpatialIndex) {
    let stats = index.stats();
    log::info!(
        "Index: {} nodes, {} leaves, deepest level {} of {}, {} leaf point references",
        stats.node_count,
        stats.leaf_count,
        stats.deepest_level,
        index.max_depth(),
        stats.leaf_point_references
    );
    for level in 0..=stats.deepest_level {
        log::debug!("  level {}: {} nodes", level, index.nodes_at_depth(level).len());
    }
}

fn pick_from_camera(
    index: &SpatialIndex,
    points: &[Point3],
    interval: RayInterval,
) -> Result<(), SpatialError> {
    let camera = Point3::new(-60.0, 70.0, -60.0);
    let target = Point3::new(5.0, 0.0, 3.0);
    let ray = Ray::through(camera, target)?;

    match sensing::pick(index, points, &ray, interval) {
        Some(hit) => log::info!(
            "Camera pick: vertex {} at ({:.2}, {:.2}, {:.2}), {:.2} from the camera",
            hit.index,
            hit.position.x,
            hit.position.y,
            hit.position.z,
            hit.distance
        ),
        None => log::info!("Camera pick: nothing under the cursor"),
    }
    Ok(())
}

/// Drop the lander from `START_HEIGHT` and step it until it comes to rest
fn simulate_descent(index: &SpatialIndex, points: &[Point3], interval: RayInterval) {
    let mut center = Point3::new(7.0, START_HEIGHT, -5.0);
    let mut velocity = Vec3::zeros();
    let extents = Vec3::new(LANDER_EXTENTS, LANDER_EXTENTS, LANDER_EXTENTS);
    let mut bounces = 0;

    for step in 0..MAX_STEPS {
        velocity.y += GRAVITY * TIME_STEP;
        center += velocity * TIME_STEP;

        let lander = AABB::from_center_extents(center, extents);
        let corners = sensing::bottom_corners(&lander);
        let contacts = sensing::probe_contacts(index, &corners);

        if !contacts.is_empty() && velocity.y < 0.0 {
            for contact in &contacts {
                log::trace!(
                    "step {}: corner {} inside leaf at depth {} ({} points)",
                    step,
                    contact.probe,
                    contact.leaf.depth(),
                    contact.leaf.point_count()
                );
            }
            if -velocity.y < SETTLE_SPEED {
                log::info!(
                    "Lander settled after {} steps, {} bounces, at y = {:.2} ({} corners down)",
                    step,
                    bounces,
                    lander.min.y,
                    contacts.len()
                );
                return;
            }
            velocity.y = -velocity.y * RESTITUTION;
            bounces += 1;
            log::debug!(
                "step {}: bounce {} with {} corners in contact",
                step,
                bounces,
                contacts.len()
            );
        }

        if step % 60 == 0 {
            match sensing::altitude(index, points, &lander.min, interval) {
                Some(AltitudeSample { surface, clearance }) => log::debug!(
                    "step {}: {:.2} above vertex {}, falling at {:.2}",
                    step,
                    clearance,
                    surface.index,
                    -velocity.y
                ),
                None => log::warn!("step {}: no terrain below the lander", step),
            }
        }
    }
    log::warn!("Lander did not settle within {} steps", MAX_STEPS);
}

fn report_display(index: &SpatialIndex, configured: DisplayMode) {
    let modes = [
        configured,
        DisplayMode::Levels { count: 3 },
        DisplayMode::Leaves,
    ];
    for mode in modes {
        let boxes = index.visible_boxes(mode);
        let mut per_color = [0usize; LEVEL_COLORS.len()];
        for slot in boxes.iter().filter_map(|b| b.palette_slot(LEVEL_COLORS.len())) {
            per_color[slot] += 1;
        }
        let summary: Vec<String> = LEVEL_COLORS
            .iter()
            .zip(per_color)
            .filter(|(_, count)| *count > 0)
            .map(|(color, count)| format!("{color}={count}"))
            .collect();
        log::info!("Display {:?}: {} boxes [{}]", mode, boxes.len(), summary.join(", "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings()?;
    logging::init_with_level(&settings.log_level);
    log::info!("Starting lander probe with max depth {}", settings.octree.max_depth);

    let points = generate_terrain(TERRAIN_SEED);
    log::info!("Generated {} terrain vertices", points.len());

    let stopwatch = Stopwatch::start_new();
    let index = SpatialIndexBuilder::from_config(points.as_slice(), &settings.octree).build_all()?;
    log::info!("Indexed terrain in {:.2} ms", stopwatch.elapsed_millis());
    report_index(&index);

    let interval = settings.query.ray_interval;
    pick_from_camera(&index, &points, interval)?;
    simulate_descent(&index, &points, interval);
    report_display(&index, settings.display);

    Ok(())
}
