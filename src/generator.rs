//! Random instance generation for benchmarks and tests.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::models::{Load, Point};

/// Generates `count` loads with coordinates uniform in
/// `[-extent, extent]²`, reproducible for a given `seed`.
///
/// Loads are numbered `1..=count`.
///
/// # Examples
///
/// ```
/// use load_routing::generator::random_loads;
///
/// let a = random_loads(5, 100.0, 42).unwrap();
/// let b = random_loads(5, 100.0, 42).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a[0].id(), "1");
/// ```
pub fn random_loads(count: usize, extent: f64, seed: u64) -> Result<Vec<Load>> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(Error::invalid_input(format!(
            "extent must be a positive finite number, got {extent}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let point = |rng: &mut StdRng| {
        Point::new(
            rng.random_range(-extent..=extent),
            rng.random_range(-extent..=extent),
        )
    };

    Ok((1..=count)
        .map(|id| {
            let pickup = point(&mut rng);
            let dropoff = point(&mut rng);
            Load::new(id.to_string(), pickup, dropoff)
        })
        .collect())
}

/// Writes loads in the input file format, header line first.
pub fn write_instance<W: Write>(mut out: W, loads: &[Load]) -> Result<()> {
    writeln!(out, "loadNumber pickup dropoff")?;
    for load in loads {
        writeln!(out, "{} {} {}", load.id(), load.pickup(), load.dropoff())?;
    }
    out.flush()?;
    Ok(())
}
