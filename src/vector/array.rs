use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::ops::impl_vector_ops;
use super::Vector2D;

/// 2D vector backed by an indexed pair, slot 0 = x, slot 1 = y, at full
/// `f64` precision.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayVector {
    axes: [f64; 2],
}

impl Vector2D for ArrayVector {
    #[inline]
    fn new(x: f64, y: f64) -> Self {
        ArrayVector { axes: [x, y] }
    }

    #[inline]
    fn x(&self) -> f64 {
        self.axes[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self.axes[1]
    }

    #[inline]
    fn set_x(&mut self, x: f64) {
        self.axes[0] = x;
    }

    #[inline]
    fn set_y(&mut self, y: f64) {
        self.axes[1] = y;
    }
}

impl Index<usize> for ArrayVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 | 1 => &self.axes[index],
            _ => panic!("Index out of bounds"),
        }
    }
}

impl IndexMut<usize> for ArrayVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 | 1 => &mut self.axes[index],
            _ => panic!("Index out of bounds"),
        }
    }
}

impl_vector_ops!(ArrayVector);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_reads_and_writes_the_axes() {
        let mut v = ArrayVector::new(1.5, -2.5);
        assert_eq!(v[0], 1.5);
        assert_eq!(v[1], -2.5);

        v[0] = 3.0;
        v[1] = 4.0;
        assert_eq!(v.to_array(), [3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn index_past_the_second_axis_panics() {
        let v = ArrayVector::new(0.0, 0.0);
        let _ = v[2];
    }

    #[test]
    fn serializes_as_the_ordered_pair() {
        let v = ArrayVector::new(645.0, 234.0);
        assert_eq!(
            serde_json::to_value(v).unwrap(),
            serde_json::json!([645.0, 234.0])
        );

        let back: ArrayVector =
            serde_json::from_value(serde_json::json!([645.0, 234.0])).unwrap();
        assert!(back.equals(&v));
    }

    #[test]
    fn casts_to_its_storage() {
        let v = ArrayVector::new(12.0, 32.0);
        assert_eq!(bytemuck::cast::<_, [f64; 2]>(v), v.to_array());
    }
}
