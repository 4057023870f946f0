use indexmap::IndexMap;

use crate::{ByteArray, IntArray, LongArray, Tag};

/// The entries of an NBT Compound. Insertion order is preserved, which keeps
/// SNBT output stable and lets a read-then-write produce the same bytes.
pub type Compound = IndexMap<String, Value>;

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively decoded. Every numeric value carries its own width, so
/// `Value::Int(5)` and `Value::Short(5)` are different values.
///
/// ```
/// # use nbtkit::{snbt, Value};
/// let v = snbt::from_str("{DataVersion: 3465}").unwrap();
/// match v.get("DataVersion") {
///     Some(Value::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    /// A Byte holding 0 or 1. It is written as a Byte and decodes from
    /// binary as a Byte; only SNBT keeps it distinct (`true`/`false`).
    Boolean(bool),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(Vec<Value>),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
}

impl Value {
    /// The tag this value is written with.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) | Value::Boolean(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Boolean(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Boolean(v) => Some(u8::from(v) as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    /// Booleans, and Bytes holding exactly 0 or 1.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(v) => Some(v),
            Value::Byte(0) => Some(false),
            Value::Byte(1) => Some(true),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    /// Look up an entry of a Compound. `None` for missing keys and for
    /// values that are not Compounds.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_compound().and_then(|c| c.get(key))
    }
}

impl AsRef<Value> for Value {
    fn as_ref(&self) -> &Value {
        self
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(bool, Boolean);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(Compound, Compound);

impl From<Vec<Value>> for Value {
    fn from(val: Vec<Value>) -> Self {
        Self::List(val)
    }
}

// ------------- fuzzing support -------------

#[cfg(feature = "arbitrary1")]
const ARBITRARY_DEPTH: usize = 6;

#[cfg(feature = "arbitrary1")]
fn arb_payload_tag(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Tag> {
    use std::convert::TryFrom;

    let n: u8 = u.int_in_range(1..=12)?;
    Tag::try_from(n).map_err(|_| arbitrary::Error::IncorrectFormat)
}

#[cfg(feature = "arbitrary1")]
fn arb_value(
    u: &mut arbitrary::Unstructured<'_>,
    tag: Tag,
    depth: usize,
) -> arbitrary::Result<Value> {
    use Value::*;

    Ok(match tag {
        Tag::End => return Err(arbitrary::Error::IncorrectFormat),
        Tag::Byte => Byte(u.arbitrary()?),
        Tag::Short => Short(u.arbitrary()?),
        Tag::Int => Int(u.arbitrary()?),
        Tag::Long => Long(u.arbitrary()?),
        Tag::Float => Float(u.arbitrary()?),
        Tag::Double => Double(u.arbitrary()?),
        Tag::ByteArray => ByteArray(u.arbitrary()?),
        Tag::String => String(u.arbitrary()?),
        Tag::IntArray => IntArray(u.arbitrary()?),
        Tag::LongArray => LongArray(u.arbitrary()?),

        // Lists need to all be the same type.
        Tag::List => {
            let mut v = vec![];
            if depth > 0 {
                let element = arb_payload_tag(u)?;
                let len = u.int_in_range(0..=8u8)?;
                for _ in 0..len {
                    v.push(arb_value(u, element, depth - 1)?);
                }
            }
            List(v)
        }
        Tag::Compound => {
            let mut c = crate::Compound::new();
            if depth > 0 {
                let len = u.int_in_range(0..=8u8)?;
                for _ in 0..len {
                    let key: std::string::String = u.arbitrary()?;
                    let tag = arb_payload_tag(u)?;
                    c.insert(key, arb_value(u, tag, depth - 1)?);
                }
            }
            Compound(c)
        }
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let tag = arb_payload_tag(u)?;
        arb_value(u, tag, ARBITRARY_DEPTH)
    }
}
