//! Helpers shared by the demo binaries.

use re::math::{Mat4, Vec3};

/// Parses a comma-separated triple such as `1,2.5,-3` into a vector.
///
/// Used as a `clap` value parser.
pub fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let comps = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid component in `{s}`: {e}"))?;
    Vec3::try_from(comps.as_slice()).map_err(|e| e.to_string())
}

/// Prints `m` with a heading, one row per line.
pub fn print_mat(title: &str, m: &Mat4) {
    println!("{title}:");
    for i in 0..4 {
        let [a, b, c, d] = m.row(i);
        println!("  {a:9.4} {b:9.4} {c:9.4} {d:9.4}");
    }
}

#[cfg(test)]
mod tests {
    use re::math::vec3;

    use super::*;

    #[test]
    fn parse_triples() {
        assert_eq!(parse_vec3("1,2.5,-3"), Ok(vec3(1.0, 2.5, -3.0)));
        assert_eq!(parse_vec3(" 0, 0 ,1"), Ok(vec3(0.0, 0.0, 1.0)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            parse_vec3("1,2"),
            Err("invalid length: expected 3 elements, found 2".into())
        );
        assert!(parse_vec3("1,x,3").is_err());
    }
}
