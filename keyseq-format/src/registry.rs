//! The catalogue of kinds a record can hold and the tags assigned to them.
//!
//! Every catalogue starts with the built-in kinds (`i8`, `i16`, `i32`, `i64`,
//! `f64`, text) at tags 0 to 5. Custom kinds registered with
//! [`catalogue!`](crate::catalogue) follow in registration order. Tags are
//! resolved once, where the catalogue is defined; writes and reads only ever
//! use the constant [`Encode::TAG`].

use std::borrow::Cow;

use crate::codec::{decode_f64, decode_int, decode_text, encode_f64, encode_int, encode_text};
use crate::error::{Error, Result};
use crate::record::{Record, RecordWriter};
use crate::tag::{BuiltinKind, Tag, BUILTIN_KINDS};

/// A closed set of custom kinds layered over the built-ins.
///
/// Implemented by [`catalogue!`](crate::catalogue), which also checks at
/// compile time that the catalogue fits in a tag.
pub trait Catalogue: 'static {
    /// Names of the custom kinds, in tag order.
    const CUSTOM_KINDS: &'static [&'static str];
}

/// The catalogue with no custom kinds.
#[derive(Debug)]
pub enum Primitives {}

impl Catalogue for Primitives {
    const CUSTOM_KINDS: &'static [&'static str] = &[];
}

/// Writes a tagged value of this kind.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a kind of catalogue `{C}`",
    label = "neither a built-in kind nor registered in `{C}`",
    note = "register it with `catalogue!`, listing it alone if it implements `Serializable<{C}>` or as `{Self} => with(encode, decode)` otherwise"
)]
pub trait Encode<C: Catalogue> {
    const TAG: Tag;

    /// Writes the payload; the tag has already been written.
    fn encode(&self, writer: &mut RecordWriter<C>) -> Result<()>;
}

/// Reads a tagged value of this kind.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be read from a record of catalogue `{C}`",
    label = "neither a built-in kind nor registered in `{C}`"
)]
pub trait Decode<C: Catalogue>: Encode<C> + Sized {
    /// Reads the payload; the tag has already been checked.
    fn decode(record: &mut Record<C>) -> Result<Self>;
}

/// A custom kind that encodes itself through a record.
///
/// The encoding of a custom kind is the concatenation of whatever its hooks
/// write, each field carrying its own tag.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is registered in `{C}` but has no serialize/deserialize hooks",
    label = "missing `Serializable<{C}>` implementation",
    note = "implement `Serializable<{C}>` or register `{Self} => with(encode, decode)` instead"
)]
pub trait Serializable<C: Catalogue>: Sized {
    fn serialize(&self, writer: &mut RecordWriter<C>) -> Result<()>;

    fn deserialize(record: &mut Record<C>) -> Result<Self>;
}

macro_rules! builtin_int {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl<C: Catalogue> Encode<C> for $ty {
            const TAG: Tag = BuiltinKind::$kind.tag();

            #[inline]
            fn encode(&self, writer: &mut RecordWriter<C>) -> Result<()> {
                encode_int(writer.buffer_mut(), *self);
                Ok(())
            }
        }

        impl<C: Catalogue> Decode<C> for $ty {
            #[inline]
            fn decode(record: &mut Record<C>) -> Result<Self> {
                record.decode_with(decode_int::<$ty>)
            }
        }
    )*};
}

builtin_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

impl<C: Catalogue> Encode<C> for f64 {
    const TAG: Tag = BuiltinKind::F64.tag();

    #[inline]
    fn encode(&self, writer: &mut RecordWriter<C>) -> Result<()> {
        let layout = writer.options().float_layout();
        encode_f64(writer.buffer_mut(), *self, layout);
        Ok(())
    }
}

impl<C: Catalogue> Decode<C> for f64 {
    #[inline]
    fn decode(record: &mut Record<C>) -> Result<Self> {
        let layout = record.options().float_layout();
        record.decode_with(|data| decode_f64(data, layout))
    }
}

impl<C: Catalogue> Encode<C> for str {
    const TAG: Tag = BuiltinKind::Text.tag();

    fn encode(&self, writer: &mut RecordWriter<C>) -> Result<()> {
        encode_text(writer.buffer_mut(), self).map(drop)
    }
}

impl<C: Catalogue> Encode<C> for String {
    const TAG: Tag = BuiltinKind::Text.tag();

    fn encode(&self, writer: &mut RecordWriter<C>) -> Result<()> {
        Encode::<C>::encode(self.as_str(), writer)
    }
}

impl<C: Catalogue> Decode<C> for String {
    fn decode(record: &mut Record<C>) -> Result<Self> {
        record.decode_with(|data| {
            let (text, consumed) = decode_text(data)?;
            Ok((text.to_owned(), consumed))
        })
    }
}

impl<C: Catalogue, T: Encode<C> + ?Sized> Encode<C> for &T {
    const TAG: Tag = T::TAG;

    #[inline]
    fn encode(&self, writer: &mut RecordWriter<C>) -> Result<()> {
        (**self).encode(writer)
    }
}

/// One entry of a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kind {
    tag: Tag,
    name: Cow<'static, str>,
}

impl Kind {
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The built-in kind behind this entry, `None` for custom kinds.
    #[inline]
    pub fn builtin(&self) -> Option<BuiltinKind> {
        BuiltinKind::from_tag(self.tag)
    }
}

/// A catalogue as an explicit ordered table, for lookups by name or tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    kinds: Vec<Kind>,
}

impl Registry {
    /// Builds the table for the built-ins followed by `custom`, in order.
    pub fn new<I, S>(custom: I) -> Result<Registry>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let custom: Vec<Cow<'static, str>> = custom.into_iter().map(Into::into).collect();
        let total = BUILTIN_KINDS + custom.len();
        if total > Tag::MAX_KINDS {
            return Err(Error::CatalogueOverflow { kinds: total });
        }

        let mut kinds = Vec::with_capacity(total);
        kinds.extend(BuiltinKind::ALL.into_iter().map(|kind| Kind {
            tag: kind.tag(),
            name: Cow::Borrowed(kind.name()),
        }));
        kinds.extend(custom.into_iter().enumerate().map(|(index, name)| Kind {
            tag: Tag::custom(index),
            name,
        }));

        tracing::debug!(kinds = kinds.len(), "built registry");
        Ok(Registry { kinds })
    }

    /// Builds the table of a catalogue type.
    pub fn of<C: Catalogue>() -> Result<Registry> {
        Registry::new(C::CUSTOM_KINDS.iter().copied())
    }

    pub fn tag_of(&self, name: &str) -> Option<Tag> {
        self.kinds
            .iter()
            .find(|kind| kind.name == name)
            .map(|kind| kind.tag)
    }

    pub fn kind(&self, tag: Tag) -> Option<&Kind> {
        usize::try_from(tag.get())
            .ok()
            .and_then(|index| self.kinds.get(index))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Kind> {
        self.kinds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_registry_holds_builtins() {
        let registry = Registry::of::<Primitives>().unwrap();
        assert_eq!(registry.len(), BUILTIN_KINDS);
        assert_eq!(registry.tag_of("i32"), Some(BuiltinKind::I32.tag()));
        assert_eq!(registry.tag_of("text"), Some(Tag::new(5)));
        assert_eq!(registry.tag_of("point"), None);
        assert_eq!(
            registry.kind(Tag::new(4)).and_then(Kind::builtin),
            Some(BuiltinKind::F64)
        );
        assert!(registry.kind(Tag::new(6)).is_none());
        assert!(registry.kind(Tag::new(-1)).is_none());
    }

    #[test]
    fn custom_kinds_follow_builtins() {
        let registry = Registry::new(["Foo", "Bar"]).unwrap();
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.tag_of("Foo"), Some(Tag::new(6)));
        assert_eq!(registry.tag_of("Bar"), Some(Tag::new(7)));
        let bar = registry.kind(Tag::new(7)).unwrap();
        assert_eq!(bar.name(), "Bar");
        assert_eq!(bar.builtin(), None);

        let names: Vec<&str> = registry.iter().map(Kind::name).collect();
        assert_eq!(names, ["i8", "i16", "i32", "i64", "f64", "text", "Foo", "Bar"]);
    }

    #[test]
    fn registry_overflow() {
        let fits = (0..Tag::MAX_KINDS - BUILTIN_KINDS).map(|i| format!("kind{}", i));
        assert_eq!(Registry::new(fits).unwrap().len(), Tag::MAX_KINDS);

        let overflows = (0..=Tag::MAX_KINDS - BUILTIN_KINDS).map(|i| format!("kind{}", i));
        assert_eq!(
            Registry::new(overflows),
            Err(Error::CatalogueOverflow {
                kinds: Tag::MAX_KINDS + 1
            })
        );
    }
}
