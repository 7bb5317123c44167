/// Largest-Triangle-Three-Buckets (LTTB) downsampling of `[x, y]` points.
/// The first and last points are always kept; the output has `target` points
/// whenever the input is longer than that.
pub fn lttb_downsample(points: &[[f64; 2]], target: usize) -> Vec<[f64; 2]> {
    let n = points.len();
    if n <= target || target < 3 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(target);
    out.push(points[0]);

    let bucket_size = (n - 2) as f64 / (target - 2) as f64;
    let mut prev = points[0];

    for i in 0..(target - 2) {
        let start = (i as f64 * bucket_size) as usize + 1;
        let end = (((i + 1) as f64 * bucket_size) as usize + 1).min(n - 1);
        let next_end = (((i + 2) as f64 * bucket_size) as usize + 1).min(n);

        // Centroid of the following bucket, or the last point for the final bucket.
        let next = &points[end..next_end.max(end + 1).min(n)];
        let [avg_x, avg_y] = centroid(next).unwrap_or(points[n - 1]);

        let mut max_area = -1.0f64;
        let mut best = points[start];
        for &p in &points[start..end.max(start + 1)] {
            // Doubled triangle area; only compared, never reported.
            let area = ((prev[0] - avg_x) * (p[1] - prev[1])
                - (prev[0] - p[0]) * (avg_y - prev[1]))
                .abs();
            if area > max_area {
                max_area = area;
                best = p;
            }
        }

        out.push(best);
        prev = best;
    }

    out.push(points[n - 1]);
    out
}

fn centroid(points: &[[f64; 2]]) -> Option<[f64; 2]> {
    if points.is_empty() {
        return None;
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
    let n = points.len() as f64;
    Some([sx / n, sy / n])
}

/// The points inside `[view_min, view_max]` plus one neighbour on each side so
/// the line runs off the edge of the view. Points must be sorted by x.
pub fn visible_window(points: &[[f64; 2]], view_min: f64, view_max: f64) -> &[[f64; 2]] {
    let start = points.partition_point(|p| p[0] < view_min).saturating_sub(1);
    let end = (points.partition_point(|p| p[0] <= view_max) + 1).min(points.len());
    if start >= end {
        return &[];
    }
    &points[start..end]
}

/// Downsample the visible part of a row-ordered line segment for drawing.
pub fn downsample_for_view(
    points: &[[f64; 2]],
    view_min: f64,
    view_max: f64,
    max_points: usize,
) -> Vec<[f64; 2]> {
    lttb_downsample(visible_window(points, view_min, view_max), max_points)
}
