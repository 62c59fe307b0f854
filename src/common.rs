use std::num::NonZeroU32;

pub type Int = i32;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;
