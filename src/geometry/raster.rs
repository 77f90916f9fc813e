use super::Position;

/// Discretized straight segment between two grid positions.
///
/// Steep runs (|gradient| > 1, including vertical) step one cell per row;
/// shallow runs step one cell per column. The cross-axis coordinate is
/// interpolated and rounded half-away-from-zero, so the result is a
/// connected line with no gaps and no doubled rows or columns.
pub fn segment(a: Position, b: Position) -> Vec<Position> {
    if a == b {
        return vec![a];
    }

    let run = b.x as f64 - a.x as f64;
    let rise = b.y as f64 - a.y as f64;

    if run == 0.0 || (rise / run).abs() > 1.0 {
        // One cell per row, from the smaller-y endpoint up
        let (start, end) = if a.y <= b.y { (a, b) } else { (b, a) };
        let inv_gradient = (end.x as f64 - start.x as f64) / (end.y as f64 - start.y as f64);
        (0..=end.y - start.y)
            .map(|step| {
                let x = (start.x as f64 + inv_gradient * step as f64).round();
                Position::new(x as u32, start.y + step)
            })
            .collect()
    } else {
        // One cell per column, from the smaller-x endpoint right
        let (start, end) = if a.x <= b.x { (a, b) } else { (b, a) };
        let gradient = (end.y as f64 - start.y as f64) / (end.x as f64 - start.x as f64);
        (0..=end.x - start.x)
            .map(|step| {
                let y = (start.y as f64 + gradient * step as f64).round();
                Position::new(start.x + step, y as u32)
            })
            .collect()
    }
}

/// Every cell whose center lies within `radius` of `center`, clipped to a
/// `width` x `height` grid
pub fn disc(center: Position, radius: f64, width: u32, height: u32) -> Vec<Position> {
    let reach = radius.ceil() as i64;
    let cx = center.x as i64;
    let cy = center.y as i64;

    let y_min = (cy - reach).max(0);
    let y_max = (cy + reach).min(height as i64 - 1);
    let x_min = (cx - reach).max(0);
    let x_max = (cx + reach).min(width as i64 - 1);

    let mut cells = Vec::new();
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            if dx * dx + dy * dy <= radius * radius {
                cells.push(Position::new(x as u32, y as u32));
            }
        }
    }
    cells
}

/// Normalize two drag corners into (top-left, bottom-right)
pub fn rect_corners(a: Position, b: Position) -> (Position, Position) {
    (
        Position::new(a.x.min(b.x), a.y.min(b.y)),
        Position::new(a.x.max(b.x), a.y.max(b.y)),
    )
}
