use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::ops::impl_vector_ops;
use super::Vector2D;

/// 2D vector backed by two named fields rather than an indexed pair.
///
/// The fields are public: reading or assigning `v.x` addresses the same
/// storage the accessors do. Observable behavior is identical to
/// [`ArrayVector`](super::ArrayVector).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct ObjectVector {
    /// The `x` (traditionally, horizontal) axis.
    pub x: f64,
    /// The `y` (traditionally, vertical) axis.
    pub y: f64,
}

impl Vector2D for ObjectVector {
    #[inline]
    fn new(x: f64, y: f64) -> Self {
        ObjectVector { x, y }
    }

    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    #[inline]
    fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}

impl_vector_ops!(ObjectVector);
