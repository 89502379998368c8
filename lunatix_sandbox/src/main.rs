use anyhow::Context;
use lunatix_math::Vector2D;
use lunatix_particles::{Particle, ParticleSystem};
use lunatix_physics::{
    CollisionSettings, FloatPosition, FloatingBox, Polygon, collision_poly_with, load_or_default,
};
use std::env;
use std::path::PathBuf;

const PARTICLE_COUNT: usize = 32;
const MAX_TICKS: usize = 64;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let root = match parse_flag_value(&args, "--path") {
        Ok(Some(path)) => PathBuf::from(path),
        Ok(None) => env::current_dir().context("cannot read the current directory")?,
        Err(err) => {
            print_usage();
            return Err(err);
        }
    };

    let settings = load_or_default(&root)
        .with_context(|| format!("cannot load physics settings from {}", root.display()))?;
    log::info!("collision settings: {:?}", settings.collision);

    run_polygons(&settings.collision)?;
    run_particles()?;
    Ok(())
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  lunatix_sandbox [--path <dir>]   # reads <dir>/lunatix.toml if present");
}

/// Value following `flag`, `None` when the flag is absent.
fn parse_flag_value(args: &[String], flag: &str) -> anyhow::Result<Option<String>> {
    let Some(idx) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(idx + 1) {
        Some(value) if !value.starts_with("--") => Ok(Some(value.clone())),
        _ => anyhow::bail!("{flag} expects a value"),
    }
}

fn polygon(points: &[(f32, f32)]) -> Polygon {
    points
        .iter()
        .map(|&(x, y)| FloatPosition::new(x, y))
        .collect()
}

fn run_polygons(settings: &CollisionSettings) -> anyhow::Result<()> {
    let mut diamond = polygon(&[(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0)]);
    let square = polygon(&[(8.0, 8.0), (14.0, 8.0), (14.0, 14.0), (8.0, 14.0)]);
    let notch = polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (5.0, 3.0), (0.0, 10.0)]);

    let pairs = [("diamond/square", &diamond, &square), ("diamond/notch", &diamond, &notch)];
    for (name, a, b) in pairs {
        let hit = collision_poly_with(a, b, settings)?;
        log::info!("{name}: collision = {hit}");
    }

    diamond.move_to(FloatPosition::new(40.0, 40.0))?;
    let hit = collision_poly_with(&diamond, &square, settings)?;
    log::info!(
        "diamond moved to {:?}: collision with square = {hit}",
        diamond.centroid()
    );
    Ok(())
}

fn run_particles() -> anyhow::Result<()> {
    let mut system = ParticleSystem::new(PARTICLE_COUNT);
    for i in 0..PARTICLE_COUNT {
        let angle = i as f32 / PARTICLE_COUNT as f32 * std::f32::consts::TAU;
        let velocity = Vector2D::new(angle.cos(), angle.sin()) * 2.0;
        let area = FloatingBox::new(FloatPosition::new(100.0, 100.0), 4, 4);
        system.add_particle(Particle::with_velocity(area, velocity))?;
    }

    for tick in 0..MAX_TICKS {
        if system.nb_active_particles() == 0 {
            log::info!("all particles gone after {tick} ticks");
            return Ok(());
        }
        system.update_particles();
        log::debug!(
            "tick {tick}: {} active, {} visible",
            system.nb_active_particles(),
            system.visible_particles().count()
        );
    }
    log::warn!(
        "{} particles still alive after {MAX_TICKS} ticks",
        system.nb_active_particles()
    );
    Ok(())
}
