//! Builds a look-at transform and shows where it maps a few points.
//!
//! Run with `RUST_LOG=debug` to see diagnostics from degenerate inputs,
//! for example an up vector parallel to the viewing direction.

use anyhow::Result;
use clap::Parser;

use re::prelude::*;
use rigmath_demos::{parse_vec3, print_mat};

#[derive(Parser)]
#[command(version, about = "Orient an object towards a target point")]
struct Args {
    /// Position of the object, as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,2,5")]
    eye: Vec3,

    /// Point to look at, as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,0")]
    at: Vec3,

    /// Approximate up direction, as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,1,0")]
    up: Vec3,
}

fn main() -> Result<()> {
    env_logger::init();
    let Args { eye, at, up } = Args::parse();

    log::info!("eye={eye} at={at} up={up}");

    let m = look_at(&eye, &at, &up);
    print_mat("transform", &m);
    println!("determinant: {:.6}", m.determinant());

    let inv = m.inverse();
    print_mat("inverse", &inv);

    for p in [Vec3::ZERO, Vec3::X, Vec3::Y, -Vec3::Z] {
        let world = m.transform_point(&p);
        let back = inv.transform_point(&world);
        println!("local {p:.3} -> world {world:.3} -> local {back:.3}");
    }

    let dir = (at - eye).normalized();
    let fwd = m * -Vec3::Z;
    println!("forward {fwd:.3}, angle to target {:.3}", fwd.angle(&dir));

    Ok(())
}
