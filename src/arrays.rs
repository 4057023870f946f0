use std::ops::{Deref, DerefMut};

macro_rules! nbt_array {
    ($(#[$meta:meta])* $name:ident, $elem:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        #[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = Vec<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }
    };
}

nbt_array!(
    /// NBT ByteArray. Unlike a List of Byte there is no per-element tag on the
    /// wire and the SNBT form is `[B;1b,2b]`.
    ByteArray,
    i8
);

nbt_array!(
    /// NBT IntArray, written as `[I;1,2]` in SNBT.
    IntArray,
    i32
);

nbt_array!(
    /// NBT LongArray, written as `[L;1l,2l]` in SNBT.
    LongArray,
    i64
);
