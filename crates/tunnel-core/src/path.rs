//! Tunnel centerline: an open centripetal Catmull-Rom spline.
//!
//! The curve can be sampled by its raw parameter `t` (uniform per control
//! segment) or by arc-length fraction `u`, which is what the tube mesh and the
//! camera use so that motion along the tunnel has constant speed.

use crate::constants::{ARC_LENGTH_DIVISIONS, TUNNEL_CONTROL_POINTS};
use crate::error::InitError;
use glam::Vec3;

const TANGENT_DELTA: f32 = 0.0001;

#[derive(Clone, Debug)]
pub struct TunnelPath {
    points: Vec<Vec3>,
    arc_lengths: Vec<f32>,
}

impl TunnelPath {
    pub fn new(points: Vec<Vec3>) -> Result<Self, InitError> {
        if points.len() < 2 {
            return Err(InitError::EmptyPath(points.len()));
        }
        Ok(Self::build(points))
    }

    /// The fixed eight-point tunnel the scene flies through.
    pub fn tunnel() -> Self {
        Self::build(TUNNEL_CONTROL_POINTS.iter().map(|p| Vec3::from(*p)).collect())
    }

    fn build(points: Vec<Vec3>) -> Self {
        let mut path = Self {
            points,
            arc_lengths: Vec::new(),
        };
        path.arc_lengths = path.compute_arc_lengths(ARC_LENGTH_DIVISIONS);
        path
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Approximate curve length from the arc-length table.
    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Point at raw curve parameter `t` in \[0, 1\].
    pub fn point(&self, t: f32) -> Vec3 {
        let l = self.points.len();
        let p = (l - 1) as f32 * t.clamp(0.0, 1.0);
        let mut seg = p.floor() as usize;
        let mut weight = p - seg as f32;
        if seg >= l - 1 {
            seg = l - 2;
            weight = 1.0;
        }

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        // Phantom end points mirror the neighbouring control point.
        let p0 = if seg > 0 {
            self.points[seg - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if seg + 2 < l {
            self.points[seg + 2]
        } else {
            p2 * 2.0 - p1
        };
        centripetal(p0, p1, p2, p3, weight)
    }

    /// Point at arc-length fraction `u` in \[0, 1\].
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.u_to_t(u))
    }

    /// Unit tangent at raw parameter `t`, by central difference.
    pub fn tangent(&self, t: f32) -> Vec3 {
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);
        (self.point(t2) - self.point(t1)).normalize_or_zero()
    }

    pub fn tangent_at(&self, u: f32) -> Vec3 {
        self.tangent(self.u_to_t(u))
    }

    /// Map an arc-length fraction to the raw curve parameter.
    pub fn u_to_t(&self, u: f32) -> f32 {
        let lengths = &self.arc_lengths;
        let n = lengths.len();
        let target = u.clamp(0.0, 1.0) * self.length();
        let i = lengths
            .partition_point(|&l| l <= target)
            .saturating_sub(1)
            .min(n - 2);
        let before = lengths[i];
        let span = lengths[i + 1] - before;
        let frac = if span > 0.0 {
            (target - before) / span
        } else {
            0.0
        };
        (i as f32 + frac) / (n - 1) as f32
    }

    fn compute_arc_lengths(&self, divisions: usize) -> Vec<f32> {
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut last = self.point(0.0);
        let mut sum = 0.0;
        lengths.push(0.0);
        for d in 1..=divisions {
            let current = self.point(d as f32 / divisions as f32);
            sum += current.distance(last);
            lengths.push(sum);
            last = current;
        }
        lengths
    }
}

/// Wrap a progress value into \[0, 1).
#[inline]
pub fn wrap_progress(p: f32) -> f32 {
    let r = p.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}

/// Centripetal Catmull-Rom segment between `p1` and `p2`.
fn centripetal(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let mut dt0 = p0.distance_squared(p1).powf(0.25);
    let mut dt1 = p1.distance_squared(p2).powf(0.25);
    let mut dt2 = p2.distance_squared(p3).powf(0.25);

    // coincident points
    if dt1 < 1e-4 {
        dt1 = 1.0;
    }
    if dt0 < 1e-4 {
        dt0 = dt1;
    }
    if dt2 < 1e-4 {
        dt2 = dt1;
    }

    let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
    let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

    let c0 = p1;
    let c1 = m1;
    let c2 = p1 * -3.0 + p2 * 3.0 - m1 * 2.0 - m2;
    let c3 = p1 * 2.0 - p2 * 2.0 + m1 + m2;

    let t2 = t * t;
    let t3 = t2 * t;
    c0 + c1 * t + c2 * t2 + c3 * t3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_progress_stays_in_unit_interval() {
        assert_eq!(wrap_progress(0.0), 0.0);
        assert_eq!(wrap_progress(1.0), 0.0);
        assert!((wrap_progress(1.25) - 0.25).abs() < 1e-6);
        assert!((wrap_progress(-0.25) - 0.75).abs() < 1e-6);
        let tiny = wrap_progress(-1e-9);
        assert!((0.0..1.0).contains(&tiny));
    }

    #[test]
    fn arc_length_table_is_monotonic() {
        let path = TunnelPath::tunnel();
        assert_eq!(path.arc_lengths.len(), ARC_LENGTH_DIVISIONS + 1);
        assert!(path.arc_lengths.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn u_to_t_hits_both_ends() {
        let path = TunnelPath::tunnel();
        assert_eq!(path.u_to_t(0.0), 0.0);
        assert!((path.u_to_t(1.0) - 1.0).abs() < 1e-6);
    }
}
