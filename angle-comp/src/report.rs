//! Compensation table output
//!
//! Writes one `;`-separated row per angle: raw input, compensated output and
//! the applied correction, all in degrees.

use crate::compensator::AngleCompensator;
use crate::config::TableRange;
use crate::error::Result;
use std::io::Write;

pub const TABLE_HEADER: &str = "Input   ;Output  ;Correction";

/// Write the compensation table for `range` to `out`.
///
/// Returns the number of data rows written.
pub fn write_compensation_table<W: Write>(
    compensator: &AngleCompensator,
    range: &TableRange,
    out: &mut W,
) -> Result<usize> {
    let angles = range.angles()?;

    writeln!(out, "{}", TABLE_HEADER)?;
    let mut rows = 0;
    for raw in angles {
        let comp = compensator.compensate_angle_in_deg(raw);
        writeln!(out, "{:10.6};{:10.6};{:10.6}", raw, comp, comp - raw)?;
        rows += 1;
    }
    out.flush()?;

    log::debug!("Wrote compensation table with {} rows", rows);
    Ok(rows)
}

/// Largest disagreement between the degree and radian formulas over `range`.
pub fn max_deviation_deg(compensator: &AngleCompensator, range: &TableRange) -> Result<f64> {
    Ok(range
        .angles()?
        .map(|deg| {
            let via_rad = compensator
                .compensate_angle_in_rad(deg.to_radians())
                .to_degrees();
            (compensator.compensate_angle_in_deg(deg) - via_rad).abs()
        })
        .fold(0.0, f64::max))
}
