/// Numeric type usable as an edge weight and a path distance.
///
/// Absent edges and unreachable distances are never encoded as a special
/// weight value (such as infinity). They are represented by `None` wherever
/// they can occur.
pub trait Weight: PartialOrd + Clone + Sized {
    fn zero() -> Self;
    fn is_unsigned() -> bool;

    /// Sum of two weights, or `None` if it is not representable.
    fn checked_add(&self, other: &Self) -> Option<Self>;

    /// Returns true if the weight is less than zero.
    fn is_negative(&self) -> bool {
        !Self::is_unsigned() && *self < Self::zero()
    }

    /// Returns false for values that cannot be compared, such as NaN.
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }

    /// Returns false for infinite and NaN values.
    fn is_finite(&self) -> bool {
        self.is_comparable()
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *other)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                <$ty>::default()
            }

            fn is_unsigned() -> bool {
                false
            }

            // Overflow of floats does not panic, it produces an infinity.
            fn checked_add(&self, other: &Self) -> Option<Self> {
                Some(self + other).filter(|sum| sum.is_finite())
            }

            fn is_finite(&self) -> bool {
                <$ty>::is_finite(*self)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
