//! Depth axis selection.

use bevy::prelude::*;

/// Coordinate axis treated as depth for a merge.
///
/// The same axis is used to order planes and is collapsed to zero in the
/// merged output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum DepthAxis {
    X,
    Y,
    #[default]
    Z,
}

impl DepthAxis {
    /// Index of this axis in a `[x, y, z]` triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            DepthAxis::X => 0,
            DepthAxis::Y => 1,
            DepthAxis::Z => 2,
        }
    }

    /// Unit vector pointing along this axis.
    #[inline]
    pub const fn unit(self) -> Vec3 {
        match self {
            DepthAxis::X => Vec3::X,
            DepthAxis::Y => Vec3::Y,
            DepthAxis::Z => Vec3::Z,
        }
    }

    /// Component of `v` along this axis.
    #[inline]
    pub fn component(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// Copy of `v` with this axis set to `0.0`.
    ///
    /// The other two components are left bit-for-bit untouched.
    #[inline]
    pub fn flatten(self, v: Vec3) -> Vec3 {
        let mut out = v;
        out[self.index()] = 0.0;
        out
    }

    /// Mean of this axis component across the quad's vertices.
    pub fn depth_key(self, quad: &[Vec3; 4]) -> f32 {
        let n = quad.len() as f32;
        // Divided per vertex so finite depths near f32::MAX cannot overflow.
        let mean: f32 = quad.iter().map(|v| self.component(*v) / n).sum();
        // Adding +0.0 folds -0.0 into 0.0 so both compare equal under total_cmp.
        mean + 0.0
    }

    /// Flattens all four vertices of a quad, preserving their order.
    pub fn flatten_quad(self, quad: &[Vec3; 4]) -> [Vec3; 4] {
        quad.map(|v| self.flatten(v))
    }
}
