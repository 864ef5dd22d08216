use crate::foundation::core::Point;
use crate::foundation::error::BrushResult;
use crate::path::command::{Path, PathCommand};

/// Build the modern orthogonal elbow between two tree nodes: four control
/// points with a single horizontal interior segment at the vertical midpoint.
pub fn elbow_path(source: Point, target: Point) -> Path {
    let mid_y = source.y + (target.y - source.y) / 2.0;
    Path::from_commands(vec![
        PathCommand::MoveTo(source),
        PathCommand::LineTo(Point::new(source.x, mid_y)),
        PathCommand::LineTo(Point::new(target.x, mid_y)),
        PathCommand::LineTo(target),
    ])
}

/// Inset a link path's endpoints vertically so it does not overlap the node
/// boxes it connects: the first command moves down by `start_inset`, the last
/// up by `end_inset`.
pub fn trim_path_endpoints(d: &str, start_inset: f64, end_inset: f64) -> BrushResult<String> {
    let mut path = Path::parse(d)?;
    let commands = path.commands_mut();

    if let Some(first) = commands.first_mut()
        && let Some(p) = first.endpoint()
    {
        *first = first.with_endpoint(Point::new(p.x, p.y + start_inset));
    }
    if let Some(last) = commands.last_mut()
        && let Some(p) = last.endpoint()
    {
        *last = last.with_endpoint(Point::new(p.x, p.y - end_inset));
    }

    Ok(path.to_string())
}
