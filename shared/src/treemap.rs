/// Target aspect ratio for squarified rows, the golden ratio (1 + √5) / 2.
const SQUARIFY_RATIO: f64 = 1.618_033_988_749_895;

/// Axis-aligned rectangle in surface pixels, `(x0, y0)` top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TileRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl TileRect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Shrink by `d` on every side. A side that would invert collapses to its
    /// midpoint instead.
    pub fn inset(&self, d: f64) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) = (self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d);
        if x1 < x0 {
            x0 = (x0 + x1) / 2.0;
            x1 = x0;
        }
        if y1 < y0 {
            y0 = (y0 + y1) / 2.0;
            y1 = y0;
        }
        Self { x0, y0, x1, y1 }
    }

    fn point(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }
}

/// Lay out weighted items over a `width × height` surface with `padding`
/// pixels between tiles and around the edge. Output is in input order.
pub fn layout(weights: &[f64], width: f64, height: f64, padding: f64) -> Vec<TileRect> {
    let half = padding / 2.0;
    let inner = TileRect::new(0.0, 0.0, width.max(0.0), height.max(0.0)).inset(padding - half);
    squarify(weights, inner)
        .into_iter()
        .map(|rect| rect.inset(half))
        .collect()
}

/// Squarified subdivision of `bounds`. Areas are proportional to weights and
/// tile the bounds exactly. Zero weights get zero-area rectangles; if nothing
/// has weight every item collapses onto the top-left corner.
pub fn squarify(weights: &[f64], bounds: TileRect) -> Vec<TileRect> {
    let weights: Vec<f64> = weights
        .iter()
        .map(|w| if w.is_finite() { w.max(0.0) } else { 0.0 })
        .collect();
    let n = weights.len();
    let mut out = vec![TileRect::point(bounds.x0, bounds.y0); n];

    // suffix[i] = total weight of items i.. not yet placed.
    let mut suffix = vec![0.0; n + 1];
    for i in (0..n).rev() {
        suffix[i] = suffix[i + 1] + weights[i];
    }

    let TileRect { mut x0, mut y0, x1, y1 } = bounds;
    let mut i0 = 0;
    while i0 < n {
        let remaining = suffix[i0];
        if remaining <= 0.0 {
            for rect in &mut out[i0..] {
                *rect = TileRect::point(x0, y0);
            }
            break;
        }

        let dx = x1 - x0;
        let dy = y1 - y0;

        // Leading zero weights ride along with the next non-empty item.
        let mut i1 = i0;
        let mut sum;
        loop {
            sum = weights[i1];
            i1 += 1;
            if sum > 0.0 || i1 >= n {
                break;
            }
        }

        if dx <= 0.0 || dy <= 0.0 {
            // Flat box: nothing to optimise, place the rest as one row.
            sum = remaining;
            i1 = n;
        } else {
            let mut min = sum;
            let mut max = sum;
            let alpha = (dy / dx).max(dx / dy) / (remaining * SQUARIFY_RATIO);
            let mut beta = sum * sum * alpha;
            let mut min_ratio = (max / beta).max(beta / min);
            while i1 < n {
                let value = weights[i1];
                let next_sum = sum + value;
                let next_min = min.min(value);
                let next_max = max.max(value);
                beta = next_sum * next_sum * alpha;
                let ratio = (next_max / beta).max(beta / next_min);
                if ratio > min_ratio {
                    break;
                }
                sum = next_sum;
                min = next_min;
                max = next_max;
                min_ratio = ratio;
                i1 += 1;
            }
        }

        let row = i0..i1;
        if dx < dy {
            let split = if dy > 0.0 { y0 + dy * sum / remaining } else { y1 };
            dice(&weights[row.clone()], sum, &mut out[row], x0, y0, x1, split);
            y0 = split;
        } else {
            let split = if dx > 0.0 { x0 + dx * sum / remaining } else { x1 };
            slice(&weights[row.clone()], sum, &mut out[row], x0, y0, split, y1);
            x0 = split;
        }
        i0 = i1;
    }
    out
}

/// Split a horizontal band left-to-right.
fn dice(weights: &[f64], total: f64, out: &mut [TileRect], x0: f64, y0: f64, x1: f64, y1: f64) {
    let k = if total > 0.0 { (x1 - x0) / total } else { 0.0 };
    let mut x = x0;
    for (rect, weight) in out.iter_mut().zip(weights) {
        let next = x + weight * k;
        *rect = TileRect::new(x, y0, next, y1);
        x = next;
    }
}

/// Split a vertical band top-to-bottom.
fn slice(weights: &[f64], total: f64, out: &mut [TileRect], x0: f64, y0: f64, x1: f64, y1: f64) {
    let k = if total > 0.0 { (y1 - y0) / total } else { 0.0 };
    let mut y = y0;
    for (rect, weight) in out.iter_mut().zip(weights) {
        let next = y + weight * k;
        *rect = TileRect::new(x0, y, x1, next);
        y = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_rect(actual: TileRect, expected: (f64, f64, f64, f64)) {
        let (x0, y0, x1, y1) = expected;
        assert!(
            (actual.x0 - x0).abs() < EPS
                && (actual.y0 - y0).abs() < EPS
                && (actual.x1 - x1).abs() < EPS
                && (actual.y1 - y1).abs() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn overlap(a: &TileRect, b: &TileRect) -> f64 {
        let w = (a.x1.min(b.x1) - a.x0.max(b.x0)).max(0.0);
        let h = (a.y1.min(b.y1) - a.y0.max(b.y0)).max(0.0);
        w * h
    }

    #[test]
    fn single_item_fills_bounds() {
        let rects = squarify(&[42.0], TileRect::new(0.0, 0.0, 1920.0, 1080.0));
        assert_eq!(rects.len(), 1);
        assert_rect(rects[0], (0.0, 0.0, 1920.0, 1080.0));
    }

    #[test]
    fn areas_are_proportional_and_cover_bounds() {
        let weights = [400.0, 300.0, 200.0, 100.0, 50.0, 50.0, 7.0];
        let bounds = TileRect::new(0.0, 0.0, 50.0, 20.0);
        let rects = squarify(&weights, bounds);
        let total: f64 = weights.iter().sum();

        assert_eq!(rects.len(), weights.len());
        let covered: f64 = rects.iter().map(TileRect::area).sum();
        assert!((covered - bounds.area()).abs() < EPS);
        for (rect, weight) in rects.iter().zip(weights) {
            let expected = bounds.area() * weight / total;
            assert!(
                (rect.area() - expected).abs() < EPS,
                "weight {weight}: area {} != {expected}",
                rect.area()
            );
        }
    }

    #[test]
    fn tiles_do_not_overlap_and_stay_inside() {
        let weights: Vec<f64> = (1..=40).rev().map(|v| (v * v) as f64).collect();
        let bounds = TileRect::new(0.0, 0.0, 1280.0, 720.0);
        let rects = squarify(&weights, bounds);
        for (i, a) in rects.iter().enumerate() {
            assert!(a.x0 >= -EPS && a.y0 >= -EPS);
            assert!(a.x1 <= 1280.0 + EPS && a.y1 <= 720.0 + EPS);
            for b in &rects[i + 1..] {
                assert!(overlap(a, b) < EPS, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn first_row_takes_largest_items_in_input_order() {
        let rects = squarify(&[6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0], TileRect::new(0.0, 0.0, 6.0, 4.0));
        // The largest item sits at the origin; order is preserved, not resorted.
        assert!((rects[0].x0).abs() < EPS && (rects[0].y0).abs() < EPS);
        assert!(rects[0].area() >= rects[6].area());
    }

    #[test]
    fn zero_weight_gets_zero_area_inside_bounds() {
        let bounds = TileRect::new(0.0, 0.0, 100.0, 100.0);
        let rects = squarify(&[10.0, 0.0, 5.0, 0.0], bounds);
        assert!(rects[1].area().abs() < EPS);
        assert!(rects[3].area().abs() < EPS);
        for rect in &rects {
            assert!(rect.x0 >= 0.0 && rect.x1 <= 100.0 + EPS);
            assert!(rect.y0 >= 0.0 && rect.y1 <= 100.0 + EPS);
        }
        let covered = rects[0].area() + rects[2].area();
        assert!((covered - bounds.area()).abs() < EPS);
    }

    #[test]
    fn all_zero_weights_collapse_to_origin() {
        let rects = squarify(&[0.0, 0.0, 0.0], TileRect::new(5.0, 7.0, 50.0, 70.0));
        for rect in rects {
            assert_rect(rect, (5.0, 7.0, 5.0, 7.0));
        }
    }

    #[test]
    fn empty_input_yields_no_tiles() {
        assert!(layout(&[], 800.0, 600.0, 2.0).is_empty());
    }

    #[test]
    fn layout_pads_edges_and_siblings() {
        let single = layout(&[1.0], 100.0, 50.0, 2.0);
        assert_rect(single[0], (2.0, 2.0, 98.0, 48.0));

        let pair = layout(&[1.0, 1.0], 100.0, 50.0, 2.0);
        assert_rect(pair[0], (2.0, 2.0, 49.0, 48.0));
        assert_rect(pair[1], (51.0, 2.0, 98.0, 48.0));
    }

    #[test]
    fn padding_never_inverts_tiny_tiles() {
        let rects = layout(&[1000.0, 1.0], 40.0, 3.0, 2.0);
        for rect in rects {
            assert!(rect.width() >= 0.0 && rect.height() >= 0.0);
        }
    }

    #[test]
    fn zero_sized_surface_produces_degenerate_tiles() {
        let rects = layout(&[3.0, 2.0], 0.0, 0.0, 2.0);
        assert_eq!(rects.len(), 2);
        assert!(rects.iter().all(|r| r.area() == 0.0));
    }

    #[test]
    fn inset_collapses_to_midpoint() {
        let rect = TileRect::new(0.0, 0.0, 2.0, 10.0).inset(2.0);
        assert_rect(rect, (1.0, 2.0, 1.0, 8.0));
    }
}
