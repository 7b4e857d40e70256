//! Poses a three-joint arm stored in host-style matrix and vector types.
//!
//! The `Joint` and `Point` types below stand in for the native types of an
//! animation host. They only expose their elements by index; every
//! transform operation comes from the extension traits.

use anyhow::{Result, bail};
use clap::Parser;

use re::prelude::*;
use rigmath_demos::print_mat;

/// A joint transform stored column by column, as many hosts do.
#[derive(Debug)]
struct Joint {
    cols: [[f64; 4]; 4],
}

impl Default for Joint {
    fn default() -> Self {
        let mut cols = [[0.0; 4]; 4];
        for (i, col) in cols.iter_mut().enumerate() {
            col[i] = 1.0;
        }
        Self { cols }
    }
}

impl Elements<16> for Joint {
    fn element(&self, i: usize) -> f64 {
        self.cols[i % 4][i / 4]
    }
    fn set_element(&mut self, i: usize, v: f64) {
        self.cols[i % 4][i / 4] = v;
    }
}

/// A host position with named fields.
#[derive(Debug, Default)]
struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Elements<3> for Point {
    fn element(&self, i: usize) -> f64 {
        [self.x, self.y, self.z][i]
    }
    fn set_element(&mut self, i: usize, v: f64) {
        match i {
            0 => self.x = v,
            1 => self.y = v,
            2 => self.z = v,
            _ => panic!("index out of range: {i}"),
        }
    }
}

#[derive(Parser)]
#[command(version, about = "Forward kinematics of a simple arm")]
struct Args {
    /// Bend of each joint about its local z axis, in degrees
    #[arg(
        num_args = 3,
        allow_negative_numbers = true,
        default_values_t = [30.0, 45.0, -20.0]
    )]
    bends: Vec<f64>,

    /// Length of each bone
    #[arg(long, default_value_t = 1.0)]
    bone: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let &[shoulder, elbow, wrist] = args.bends.as_slice() else {
        bail!("expected three joint angles, got {}", args.bends.len());
    };

    // Each joint sits at the end of its parent's bone
    let bones = [(shoulder, 0.0), (elbow, args.bone), (wrist, args.bone)];
    let locals: Vec<Joint> = bones
        .into_iter()
        .map(|(bend, offset)| {
            let mut j = Joint::default();
            j.update(|m| {
                m.translate(offset, 0.0, 0.0).rotate_z(degs(bend));
            });
            j
        })
        .collect();

    let mut world = Joint::default();
    for (i, local) in locals.iter().enumerate() {
        world.update(|m| *m *= local.to_mat4());
        let pos: Point = world.transform_point(&Point::default());
        log::info!("joint {i}: ({:.3}, {:.3}, {:.3})", pos.x, pos.y, pos.z);
    }
    print_mat("wrist to world", &world.to_mat4());

    let tip_local = Point { x: args.bone, ..Point::default() };
    let tip = world.transform_point(&tip_local);
    println!("tip at ({:.3}, {:.3}, {:.3})", tip.x, tip.y, tip.z);
    println!("reach {:.3}", tip.magnitude());

    // Express the origin in the wrist's frame
    let base = world.inverse().transform_point(&Point::default());
    println!(
        "base seen from wrist: ({:.3}, {:.3}, {:.3})",
        base.x, base.y, base.z
    );

    // The same composition with run-time tagged operands
    let total = locals
        .iter()
        .map(|j| Operand::from(j.to_mat4()))
        .try_fold(Operand::from(Mat4::identity()), Operand::mul)?;
    let tip_op = total.mul(Operand::from(tip_local.to_vector()))?;
    println!("tip direction (linear part): {tip_op:?}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_bends_parse_as_angles() {
        let args = Args::try_parse_from(["rig", "-30", "45", "-20"]).unwrap();
        assert_eq!(args.bends, [-30.0, 45.0, -20.0]);
        assert_eq!(args.bone, 1.0);
    }

    #[test]
    fn default_bends() {
        let args = Args::try_parse_from(["rig", "--bone", "2"]).unwrap();
        assert_eq!(args.bends, [30.0, 45.0, -20.0]);
        assert_eq!(args.bone, 2.0);
    }

    #[test]
    fn unknown_flag_is_still_rejected() {
        assert!(Args::try_parse_from(["rig", "--reach", "1"]).is_err());
    }
}
