//! Orbits a camera around the origin and projects a point to screen space.

use anyhow::{Result, ensure};
use clap::Parser;

use re::prelude::*;
use rigmath_demos::parse_vec3;

#[derive(Parser)]
#[command(version, about = "Project a point from an orbiting camera")]
struct Args {
    /// Point to project, as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0.5,0.5,0")]
    point: Vec3,

    /// Distance of the camera from the origin
    #[arg(long, default_value_t = 5.0)]
    radius: f64,

    /// Camera height above the xz plane
    #[arg(long, default_value_t = 1.0)]
    height: f64,

    /// Number of steps in a full orbit
    #[arg(long, default_value_t = 8)]
    steps: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f64,

    /// Width-to-height ratio of the viewport
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.steps > 0, "steps must be positive");
    ensure!(args.radius > 0.0, "radius must be positive");

    let (near, far) = (0.1, 100.0);
    let project = perspective(degs(args.fov), args.aspect, near, far);

    for i in 0..args.steps {
        let az = turns(i as f64 / args.steps as f64);

        // Start at +z and swing around the y axis
        let mut cam = Mat4::identity();
        cam.rotate_y(az).translate(0.0, args.height, args.radius);

        let eye = cam.transform_point(&Vec3::ZERO);
        let view = look_at(&eye, &Vec3::ZERO, &Vec3::Y).inverse();

        let ndc = (project * view).transform_point(&args.point);
        let visible = ndc.0.iter().all(|c| (-1.0..=1.0).contains(c));

        log::debug!("step {i}: azimuth {az:.1}, eye {eye:.3}");
        println!(
            "{:>7.1}  eye {eye:.2}  ndc {ndc:.3}{}",
            az,
            if visible { "" } else { "  (clipped)" }
        );
    }
    Ok(())
}
