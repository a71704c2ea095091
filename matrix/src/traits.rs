/// A simple trait required for initializing some matrices (e.g., the
/// zero and identity matrices)
pub trait OneZero {
    /// Returns an element considered to be 0.
    fn zero() -> Self;

    /// Returns an element considered to be 1.
    fn one() -> Self;
}

macro_rules! impl_one_zero {
    ( $zero: literal, $one: literal; $( $t: ty ),* ) => {
        $(
            impl OneZero for $t {
                fn zero() -> Self {
                    $zero
                }
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_one_zero!(0, 1; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_one_zero!(0., 1.; f32, f64);

/// Define the basic algebraic requirements for T.
///
/// Every primitive integer and floating point type satisfies it.
pub trait Numberish:
    Copy
    + Clone
    + OneZero
    + PartialEq
    + Sized
    + std::fmt::Display
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::Mul<Output = Self>
    + std::ops::MulAssign
    + std::ops::Div<Output = Self>
    + std::ops::DivAssign
    + Sync
    + Send
{
}
impl<
        T: OneZero
            + Copy
            + Clone
            + PartialEq
            + Sized
            + std::fmt::Display
            + std::fmt::Debug
            + std::ops::Add<Output = Self>
            + std::ops::Sub<Output = Self>
            + std::ops::AddAssign
            + std::ops::SubAssign
            + std::ops::Mul<Output = Self>
            + std::ops::MulAssign
            + std::ops::Div<Output = Self>
            + std::ops::DivAssign
            + Sync
            + Send,
    > Numberish for T
{
}
