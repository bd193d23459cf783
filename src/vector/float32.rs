use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::ops::impl_vector_ops;
use super::Vector2D;

/// 2D vector stored as an indexed pair of 32-bit floats.
///
/// Every write narrows to `f32`, so values land at the nearest 32-bit
/// representation at construction and after every operation; reads widen
/// back to `f64`. Where an expected value has no exact 32-bit form, compare
/// with a tolerance rather than exactly.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Float32Vector {
    axes: [f32; 2],
}

impl Vector2D for Float32Vector {
    #[inline]
    fn new(x: f64, y: f64) -> Self {
        Float32Vector {
            axes: [x as f32, y as f32],
        }
    }

    #[inline]
    fn x(&self) -> f64 {
        f64::from(self.axes[0])
    }

    #[inline]
    fn y(&self) -> f64 {
        f64::from(self.axes[1])
    }

    #[inline]
    fn set_x(&mut self, x: f64) {
        self.axes[0] = x as f32;
    }

    #[inline]
    fn set_y(&mut self, y: f64) {
        self.axes[1] = y as f32;
    }
}

impl Index<usize> for Float32Vector {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 | 1 => &self.axes[index],
            _ => panic!("Index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Float32Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 | 1 => &mut self.axes[index],
            _ => panic!("Index out of bounds"),
        }
    }
}

impl_vector_ops!(Float32Vector);
