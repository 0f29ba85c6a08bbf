//! Config resolution and the build → deform → export pipeline.

use std::io::Write;

use geosphere_common::{GeosphereError, Result};
use geosphere_config::{validation, GeosphereConfig, OutputFormat};
use geosphere_mesh::{MeshBuffers, MeshStats, Sphere, SphereVertex};
use serde::Serialize;

use crate::cli::Args;

/// Load the config named by `--config`, or the platform default.
///
/// An explicit path must load and validate. A broken default config is not
/// fatal: defaults are used and the reason is returned for logging once the
/// subscriber is up.
pub fn load(args: &Args) -> Result<(GeosphereConfig, Option<String>)> {
    match args.config.as_deref() {
        Some(path) => Ok((geosphere_config::load_config(Some(path))?, None)),
        None => match geosphere_config::load_config(None) {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((
                GeosphereConfig::default(),
                Some(format!("config load failed, using defaults: {e}")),
            )),
        },
    }
}

/// Apply command-line overrides on top of `config` and re-validate.
pub fn apply_overrides(mut config: GeosphereConfig, args: &Args) -> Result<GeosphereConfig> {
    if let Some(radius) = args.radius {
        config.sphere.radius = radius;
    }
    if let Some(subdivisions) = args.subdivisions {
        config.sphere.subdivisions = subdivisions;
    }
    if let Some(mode) = args.normals {
        config.normals.mode = mode.into();
    }
    if let Some(profile) = args.profile {
        config.collision.profile = profile.into();
    }
    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    if args.interleaved {
        config.output.interleaved = true;
    }

    validation::validate(&config)?;
    Ok(config)
}

#[derive(Serialize)]
struct InterleavedOutput {
    vertices: Vec<SphereVertex>,
    indices: Vec<u32>,
}

/// Build the sphere, apply every impact and hit, and write the result.
pub fn run(args: &Args, config: &GeosphereConfig, out: &mut impl Write) -> Result<MeshStats> {
    let mut sphere = Sphere::from_config(config)?;
    let profile = config.collision.profile;

    for impact in &args.impacts {
        sphere.apply_collision(impact.point, impact.magnitude, profile)?;
    }
    for hit in &args.hits {
        let hit_sphere = sphere.hit_test(hit.point.x, hit.point.y, hit.velocity, profile)?;
        tracing::info!(x = hit.point.x, y = hit.point.y, hit = hit_sphere, "hit test");
    }

    if sphere.normals().is_none() {
        sphere.generate_normals(config.normals.mode)?;
    }

    let stats = sphere.stats();
    match config.output.format {
        OutputFormat::Summary => writeln!(
            out,
            "vertices={} triangles={} depth={} radius={} min_distance={:.6} max_distance={:.6}",
            stats.vertices,
            stats.triangles,
            sphere.depth(),
            sphere.radius(),
            stats.min_distance,
            stats.max_distance,
        )?,
        OutputFormat::Json => {
            let buffers = sphere.buffers()?;
            let json = if config.output.interleaved {
                to_json(&InterleavedOutput {
                    vertices: buffers.interleaved(),
                    indices: buffers.indices,
                })?
            } else {
                to_json::<MeshBuffers>(&buffers)?
            };
            writeln!(out, "{json}")?;
        }
    }

    Ok(stats)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| GeosphereError::Other(format!("failed to serialize buffers: {e}")))
}
