use crate::foundation::core::Point;
use crate::foundation::error::BrushResult;
use crate::path::command::{Path, PathCommand};

/// Interior points within this many units of an endpoint x-bound count as
/// lying on that bound.
const BOUND_TOLERANCE: f64 = 2.0;

/// Interior x-values closer than this collapse into one cluster, treating
/// near-collinear control points as exactly collinear.
const COLLINEAR_THRESHOLD: f64 = 1.0;

/// Three-way classification of an ancient interior point against the x-range
/// of the ancient path's own endpoints.
///
/// A tagged classification rather than +/- infinity sentinels, keeping the
/// rank arithmetic free of float-infinity edge cases.
#[derive(Clone, Copy, Debug, PartialEq)]
enum BoundClass {
    /// On (or beyond) the smaller x-bound.
    Low,
    /// On (or beyond) the larger x-bound.
    High,
    /// Strictly between the bounds.
    Interior(f64),
}

/// Replace close-together values with their cluster mean.
///
/// Sorts ascending, greedily partitions into contiguous clusters whose
/// consecutive members differ by less than `threshold`, and replaces every
/// member with the rounded arithmetic mean of its cluster. A singleton input
/// returns itself.
pub fn unify_close_numbers(values: &[f64], threshold: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut result = Vec::with_capacity(sorted.len());
    let mut cluster = vec![sorted[0]];
    for &v in &sorted[1..] {
        if (v - cluster[cluster.len() - 1]).abs() < threshold {
            cluster.push(v);
        } else {
            flush_cluster(&mut cluster, &mut result);
            cluster.push(v);
        }
    }
    flush_cluster(&mut cluster, &mut result);
    result
}

fn flush_cluster(cluster: &mut Vec<f64>, result: &mut Vec<f64>) {
    let mean = (cluster.iter().sum::<f64>() / cluster.len() as f64).round();
    result.extend(std::iter::repeat(mean).take(cluster.len()));
    cluster.clear();
}

/// Reconcile control-point topologies between an "ancient" layout path (N
/// interior bend points) and a "modern" one (a 4-command skeleton with a
/// single interior segment), so the two can be interpolated point-for-point.
///
/// Synthesizes the missing points on the modern path's interior segment at
/// fractional positions proportionally matching their ancient counterparts,
/// splicing them in immediately after the first command.
/// `control_point_budget` is the caller's expected total control-point count
/// and drives the normalization denominator.
///
/// An ancient path with fewer than 4 commands has no interior points and the
/// modern path comes back re-serialized but otherwise unchanged.
pub fn insert_matching_control_points(
    ancient_d: &str,
    modern_d: &str,
    control_point_budget: usize,
) -> BrushResult<String> {
    let ancient = Path::parse(ancient_d)?;
    let mut modern = Path::parse(modern_d)?;

    let a = ancient.commands();
    if a.len() < 4 || modern.len() < 3 {
        return Ok(modern.to_string());
    }
    let (Some(a_start), Some(a_end)) = (a[1].endpoint(), a[a.len() - 2].endpoint()) else {
        return Ok(modern.to_string());
    };

    // Interior bend points: everything between the two endpoint pairs.
    let interior: Vec<Point> = a[2..a.len() - 2]
        .iter()
        .filter_map(PathCommand::endpoint)
        .collect();
    let num_to_add = interior.len();
    if num_to_add == 0 {
        return Ok(modern.to_string());
    }

    let min_bound = a_start.x.min(a_end.x);
    let max_bound = a_start.x.max(a_end.x);
    let classes: Vec<BoundClass> = interior
        .iter()
        .map(|p| {
            if p.x < min_bound || (p.x - min_bound).abs() < BOUND_TOLERANCE {
                BoundClass::Low
            } else if p.x > max_bound || (p.x - max_bound).abs() < BOUND_TOLERANCE {
                BoundClass::High
            } else {
                BoundClass::Interior(p.x)
            }
        })
        .collect();

    let interior_xs: Vec<f64> = classes
        .iter()
        .filter_map(|c| match c {
            BoundClass::Interior(x) => Some(*x),
            _ => None,
        })
        .collect();
    let unified = unify_close_numbers(&interior_xs, COLLINEAR_THRESHOLD);

    // Rank each clustered value 1-based over the descending unique set.
    let mut unique = unified.clone();
    unique.sort_by(|x, y| y.total_cmp(x));
    unique.dedup();

    let removed = control_point_budget as i64 - a.len() as i64;
    let use_what = if removed >= 0 {
        (removed + 1) as f64
    } else {
        num_to_add as f64
    };

    // Both bound positions compare the same pair of ancient endpoints, making
    // Low and High exact mirror images.
    let low_pos = if a_start.x < a_end.x { 0.0 } else { use_what + 1.0 };
    let high_pos = if a_start.x > a_end.x { 0.0 } else { use_what + 1.0 };

    // Position order: low bounds first, clustered interiors ascending, high
    // bounds last.
    let lows = classes.iter().filter(|c| **c == BoundClass::Low).count();
    let highs = classes.iter().filter(|c| **c == BoundClass::High).count();
    let mut positions: Vec<f64> = Vec::with_capacity(num_to_add);
    positions.extend(std::iter::repeat(low_pos).take(lows));
    positions.extend(unified.iter().map(|v| {
        let rank = unique.iter().position(|u| u == v).unwrap_or(0);
        (rank + 1) as f64
    }));
    positions.extend(std::iter::repeat(high_pos).take(highs));

    // Interpolate on the modern interior segment parametrically (not by arc
    // length) and splice the synthesized points in after the first command.
    let (Some(m_start), Some(m_end)) = (
        modern.commands()[1].endpoint(),
        modern.commands()[2].endpoint(),
    ) else {
        return Ok(modern.to_string());
    };
    let inserted: Vec<PathCommand> = positions
        .iter()
        .map(|pos| PathCommand::LineTo(m_start.lerp(m_end, pos / (use_what + 1.0))))
        .collect();
    modern.commands_mut().splice(2..2, inserted);

    Ok(modern.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/morph/matcher.rs"]
mod tests;
