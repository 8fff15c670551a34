//! Viewport and Off-Screen Indicator Geometry
//!
//! Decides whether an entity is visible inside the camera viewport and, when
//! it is not, where along the screen edge a directional pointer belongs and
//! at what angle. The edge intercept is found by intersecting the
//! viewer→entity segment against the four inset viewport edges.

use crate::math2d::Vec2;

/// Intersect two bounded segments given as origin + direction.
///
/// Solves for the parameters `t1` (along `d1` from `p`) and `t2` (along `d2`
/// from `q`); a hit requires both in `[0, 1]`. Parallel segments (zero
/// denominator) never intersect here, including the collinear case.
///
/// Returns the intersection point and `t1`.
pub fn segment_intersection(p: Vec2, d1: Vec2, q: Vec2, d2: Vec2) -> Option<(Vec2, f32)> {
    let denom = d1.x * d2.y - d2.x * d1.y;
    if denom == 0.0 {
        return None;
    }

    let t1 = (d2.y * (q.x - p.x) - d2.x * (q.y - p.y)) / denom;
    let t2 = (d1.y * (q.x - p.x) - d1.x * (q.y - p.y)) / denom;

    if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
        Some((p + d1 * t1, t1))
    } else {
        None
    }
}

/// Where an off-screen pointer should be drawn, in screen coordinates,
/// and the facing angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPlacement {
    pub position: Vec2,
    pub rotation: f32,
}

/// The visible world-space rectangle centered on the viewer, with an inward
/// margin so pointers never sit flush against the true screen border.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, spacing: f32) -> Self {
        Self {
            width,
            height,
            spacing,
        }
    }

    /// Inclusive on-screen test: a point exactly on the half-extent boundary
    /// counts as visible.
    pub fn contains(&self, viewer: Vec2, point: Vec2) -> bool {
        point.x >= viewer.x - self.width / 2.0
            && point.x <= viewer.x + self.width / 2.0
            && point.y >= viewer.y - self.height / 2.0
            && point.y <= viewer.y + self.height / 2.0
    }

    /// Find the pointer placement for an off-screen target.
    ///
    /// The viewer→target segment is tested against the four inset edges in a
    /// fixed order (top, bottom, left, right); the first hit wins, which
    /// makes exact corner aims deterministic. Returns `None` when the
    /// direction is zero-length or no edge intersects, in which case the
    /// caller should leave the pointer as it was.
    pub fn edge_intercept(&self, viewer: Vec2, target: Vec2) -> Option<PointerPlacement> {
        // Viewer-local frame: the segment starts at the origin.
        let dir = target - viewer;
        if dir.x == 0.0 && dir.y == 0.0 {
            return None;
        }

        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let s = self.spacing;

        // Corners of the inset rectangle
        let top_left = Vec2::new(-half_w + s, half_h - s);
        let bottom_right = Vec2::new(half_w - s, -half_h + s);

        // Inset edges, winding top → bottom → left → right. The order is the
        // tie-break for corner aims.
        let edges = [
            (top_left, Vec2::new(self.width - s * 2.0, 0.0)),
            (bottom_right, Vec2::new(-(self.width - s * 2.0), 0.0)),
            (top_left, Vec2::new(0.0, -(self.height - s * 2.0))),
            (bottom_right, Vec2::new(0.0, self.height - s * 2.0)),
        ];

        // Converts the viewer-local intercept into screen coordinates
        let screen_center = Vec2::new(half_w, half_h);

        for (origin, edge_dir) in edges {
            if let Some((hit, _t)) = segment_intersection(Vec2::zero(), dir, origin, edge_dir) {
                return Some(PointerPlacement {
                    position: hit + screen_center,
                    rotation: -dir.y.atan2(dir.x).to_degrees(),
                });
            }
        }

        None
    }
}
