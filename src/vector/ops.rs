/// Generates the operator and conversion surface shared by every vector
/// implementation. Each impl is a one-line delegation to a
/// [`Vector2D`](super::Vector2D) method, so the operator path and the method
/// path cannot drift apart.
macro_rules! impl_vector_ops {
    ($ty:ident) => {
        impl Default for $ty {
            #[inline]
            fn default() -> Self {
                $ty::zero()
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.format(false))
            }
        }

        impl ::std::ops::AddAssign<&$ty> for $ty {
            #[inline]
            fn add_assign(&mut self, other: &$ty) {
                self.add(other);
            }
        }

        impl ::std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, other: $ty) {
                self.add(&other);
            }
        }

        impl ::std::ops::SubAssign<&$ty> for $ty {
            #[inline]
            fn sub_assign(&mut self, other: &$ty) {
                self.subtract(other);
            }
        }

        impl ::std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, other: $ty) {
                self.subtract(&other);
            }
        }

        impl ::std::ops::MulAssign<f64> for $ty {
            #[inline]
            fn mul_assign(&mut self, scalar: f64) {
                self.multiply_by_scalar(scalar);
            }
        }

        impl ::std::ops::DivAssign<f64> for $ty {
            #[inline]
            fn div_assign(&mut self, scalar: f64) {
                self.divide_by_scalar(scalar);
            }
        }

        impl ::std::ops::Neg for $ty {
            type Output = $ty;

            #[inline]
            fn neg(mut self) -> Self::Output {
                self.reverse();
                self
            }
        }

        impl From<[f64; 2]> for $ty {
            #[inline]
            fn from([x, y]: [f64; 2]) -> Self {
                $ty::new(x, y)
            }
        }

        impl From<(f64, f64)> for $ty {
            #[inline]
            fn from((x, y): (f64, f64)) -> Self {
                $ty::new(x, y)
            }
        }

        impl From<$ty> for [f64; 2] {
            #[inline]
            fn from(v: $ty) -> Self {
                v.to_array()
            }
        }

        impl From<$ty> for (f64, f64) {
            #[inline]
            fn from(v: $ty) -> Self {
                (v.x(), v.y())
            }
        }
    };
}

pub(crate) use impl_vector_ops;

#[cfg(test)]
mod tests {
    use crate::vector::{ArrayVector, Float32Vector, ObjectVector, Vector2D};

    #[test]
    fn operators_follow_the_in_place_contract() {
        let mut a = ArrayVector::new(2.0, 4.0);
        let b = ArrayVector::new(3.0, 34.0);
        a += &b;
        assert_eq!(a.to_array(), [5.0, 38.0]);
        assert_eq!(b.to_array(), [3.0, 34.0]);

        a -= b;
        assert_eq!(a.to_array(), [2.0, 4.0]);

        let mut v = ObjectVector::new(5.0, 3.0);
        v *= 3.0;
        assert_eq!(v.to_array(), [15.0, 9.0]);
        v /= 3.0;
        assert_eq!(v.to_array(), [5.0, 3.0]);

        let n = -Float32Vector::new(6.0, 9.0);
        assert_eq!(n.to_array(), [-6.0, -9.0]);
    }

    #[test]
    fn display_renders_the_unrounded_form() {
        assert_eq!(ObjectVector::new(10.9, 20.3).to_string(), "(10.9, 20.3)");
        assert_eq!(ArrayVector::default().to_string(), "(0, 0)");
    }

    #[test]
    fn converts_to_and_from_pairs() {
        let v = ArrayVector::from([6.0, 9.0]);
        assert_eq!(<(f64, f64)>::from(v), (6.0, 9.0));

        let v = ObjectVector::from((1.0, 2.0));
        assert_eq!(<[f64; 2]>::from(v), [1.0, 2.0]);
    }
}
