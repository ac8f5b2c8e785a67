use std::fmt;

use crate::tag::{BuiltinKind, Tag};

/// A value of any built-in kind.
///
/// Built-in tags fully determine payload width, so a stream holding only
/// built-in kinds can be read without knowing its types in advance.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum Primitive {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F64(f64),
    Text(String),
}

impl Primitive {
    pub fn kind(&self) -> BuiltinKind {
        match self {
            Primitive::I8(_) => BuiltinKind::I8,
            Primitive::I16(_) => BuiltinKind::I16,
            Primitive::I32(_) => BuiltinKind::I32,
            Primitive::I64(_) => BuiltinKind::I64,
            Primitive::F64(_) => BuiltinKind::F64,
            Primitive::Text(_) => BuiltinKind::Text,
        }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.kind().tag()
    }
}

/// Formats as `kind:value`, e.g. `i32:345` or `text:abc`.
impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind())?;
        match self {
            Primitive::I8(v) => write!(f, "{}", v),
            Primitive::I16(v) => write!(f, "{}", v),
            Primitive::I32(v) => write!(f, "{}", v),
            Primitive::I64(v) => write!(f, "{}", v),
            Primitive::F64(v) => write!(f, "{:?}", v),
            Primitive::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for Primitive {
            #[inline]
            fn from(value: $ty) -> Self {
                Primitive::$variant(value)
            }
        }
    )*};
}

from_primitive! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f64 => F64,
    String => Text,
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::Text(value.to_owned())
    }
}
