use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use geosphere_config::{CollisionProfile, NormalMode, OutputFormat};
use glam::{Vec2, Vec3};

/// Geosphere: build, deform, and export geodesic sphere meshes.
#[derive(Parser, Debug)]
#[command(name = "geosphere", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. `geosphere=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Sphere radius.
    #[arg(short, long)]
    pub radius: Option<f64>,

    /// Number of subdivision passes.
    #[arg(short, long)]
    pub subdivisions: Option<u32>,

    /// Normal generation mode.
    #[arg(long, value_enum)]
    pub normals: Option<NormalArg>,

    /// Collision deformation profile.
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Emit interleaved `[pos.xyz, normal.xyz]` vertices in JSON output.
    #[arg(long)]
    pub interleaved: bool,

    /// Apply a collision at `x,y,z:magnitude`. May be repeated.
    #[arg(long = "impact", value_parser = parse_impact, allow_hyphen_values = true)]
    pub impacts: Vec<Impact>,

    /// Screen-plane hit test at `x,y:velocity`. May be repeated.
    #[arg(long = "hit", value_parser = parse_hit, allow_hyphen_values = true)]
    pub hits: Vec<Hit>,

    /// Write the effective config to this path and continue.
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NormalArg {
    Smooth,
    Faceted,
}

impl From<NormalArg> for NormalMode {
    fn from(arg: NormalArg) -> Self {
        match arg {
            NormalArg::Smooth => NormalMode::Smooth,
            NormalArg::Faceted => NormalMode::Faceted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    Literal,
    Attenuated,
}

impl From<ProfileArg> for CollisionProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Literal => CollisionProfile::Literal,
            ProfileArg::Attenuated => CollisionProfile::Attenuated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Summary,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Summary => OutputFormat::Summary,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// A collision at a point in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub point: Vec3,
    pub magnitude: f32,
}

/// A pointer hit in the screen plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point: Vec2,
    pub velocity: f32,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_impact(s: &str) -> Result<Impact, String> {
    let (coords, magnitude) = split_magnitude(s)?;
    match coords[..] {
        [x, y, z] => Ok(Impact {
            point: Vec3::new(x, y, z),
            magnitude,
        }),
        _ => Err(format!("expected x,y,z:magnitude, got '{s}'")),
    }
}

fn parse_hit(s: &str) -> Result<Hit, String> {
    let (coords, velocity) = split_magnitude(s)?;
    match coords[..] {
        [x, y] => Ok(Hit {
            point: Vec2::new(x, y),
            velocity,
        }),
        _ => Err(format!("expected x,y:velocity, got '{s}'")),
    }
}

/// Split `a,b,c:m` into its comma-separated floats and the trailing scalar.
fn split_magnitude(s: &str) -> Result<(Vec<f32>, f32), String> {
    let (coords, scalar) = s
        .split_once(':')
        .ok_or_else(|| format!("missing ':<magnitude>' in '{s}'"))?;
    let scalar = parse_f32(scalar)?;
    let coords = coords
        .split(',')
        .map(parse_f32)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((coords, scalar))
}

fn parse_f32(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid number '{}': {e}", s.trim()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("number '{}' is not finite", s.trim()))
    }
}
