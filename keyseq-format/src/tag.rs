use std::fmt;

use crate::buffer::ByteBuffer;
use crate::codec::int::OrderedInt;
use crate::error::DecodeResult;

/// Number of built-in kinds; custom tags start here.
pub const BUILTIN_KINDS: usize = BuiltinKind::ALL.len();

/// Position of a kind in a catalogue.
///
/// Stored on the wire as a single biased `i8`, so tag `t` is the byte
/// `t + 0x80`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(i8);

impl Tag {
    /// Most kinds a single catalogue may hold.
    pub const MAX_KINDS: usize = i8::MAX as usize;

    #[inline]
    pub const fn new(value: i8) -> Tag {
        Tag(value)
    }

    /// Tag of the `index`th custom kind of a catalogue.
    ///
    /// Panics if the kind does not fit in a tag; in a `const` this is a
    /// compile error. Use [`Tag::try_custom`] for indexes known only at
    /// runtime.
    pub const fn custom(index: usize) -> Tag {
        assert!(
            index < Tag::MAX_KINDS - BUILTIN_KINDS,
            "catalogue overflow: custom kind does not fit in a tag"
        );
        Tag((BUILTIN_KINDS + index) as i8)
    }

    /// Tag of the `index`th custom kind, or `None` if it does not fit.
    pub const fn try_custom(index: usize) -> Option<Tag> {
        if index < Tag::MAX_KINDS - BUILTIN_KINDS {
            Some(Tag((BUILTIN_KINDS + index) as i8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> i8 {
        self.0
    }

    #[inline]
    pub fn is_builtin(self) -> bool {
        BuiltinKind::from_tag(self).is_some()
    }

    #[inline]
    pub fn encode(self, buf: &mut ByteBuffer) {
        self.0.write_biased(buf);
    }

    #[inline]
    pub fn decode(data: &[u8]) -> DecodeResult<Tag> {
        let (value, consumed) = i8::read_biased(data)?;
        Ok((Tag(value), consumed))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The primitive kinds every catalogue starts with, in tag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum BuiltinKind {
    I8 = 0,
    I16 = 1,
    I32 = 2,
    I64 = 3,
    F64 = 4,
    Text = 5,
}

impl BuiltinKind {
    pub const ALL: [BuiltinKind; 6] = [
        BuiltinKind::I8,
        BuiltinKind::I16,
        BuiltinKind::I32,
        BuiltinKind::I64,
        BuiltinKind::F64,
        BuiltinKind::Text,
    ];

    #[inline]
    pub const fn tag(self) -> Tag {
        Tag(self as i8)
    }

    pub fn from_tag(tag: Tag) -> Option<BuiltinKind> {
        use BuiltinKind::*;

        let kind = match tag.0 {
            0 => I8,
            1 => I16,
            2 => I32,
            3 => I64,
            4 => F64,
            5 => Text,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinKind::I8 => "i8",
            BuiltinKind::I16 => "i16",
            BuiltinKind::I32 => "i32",
            BuiltinKind::I64 => "i64",
            BuiltinKind::F64 => "f64",
            BuiltinKind::Text => "text",
        }
    }

    pub fn from_name(name: &str) -> Option<BuiltinKind> {
        BuiltinKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Payload width, `None` for variable-length text.
    pub fn width(self) -> Option<usize> {
        match self {
            BuiltinKind::I8 => Some(1),
            BuiltinKind::I16 => Some(2),
            BuiltinKind::I32 => Some(4),
            BuiltinKind::I64 | BuiltinKind::F64 => Some(8),
            BuiltinKind::Text => None,
        }
    }
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
