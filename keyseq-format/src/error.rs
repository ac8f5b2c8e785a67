use crate::tag::Tag;

pub type Result<T> = std::result::Result<T, Error>;

/// Result of a sans-IO decoder: the value and the number of bytes it consumed.
pub type DecodeResult<T> = Result<(T, usize)>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The tag in the stream is not the tag of the kind being read.
    #[error("type mismatch at offset {offset:#x}: expected tag {expected}, found tag {found}")]
    TypeMismatch {
        offset: usize,
        expected: Tag,
        found: Tag,
    },

    /// Fewer bytes remain than the operation needs.
    #[error("buffer exhausted at offset {offset:#x}: need {needed} bytes, {remaining} remaining")]
    Exhausted {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// No decoder is known for this tag.
    #[error("unsupported tag {tag}")]
    Unsupported { tag: Tag },

    #[error("catalogue holds {kinds} kinds, at most {} fit in a tag", Tag::MAX_KINDS)]
    CatalogueOverflow { kinds: usize },

    #[error("text contains a nul byte at position {position}")]
    InteriorNul { position: usize },

    #[error("text at offset {offset:#x} is not valid UTF-8")]
    InvalidText { offset: usize },
}

impl Error {
    pub(crate) fn exhausted(data: &[u8], needed: usize) -> Error {
        Error::Exhausted {
            offset: 0,
            needed,
            remaining: data.len(),
        }
    }

    /// Shifts slice-relative offsets reported by a decoder to buffer offsets.
    pub(crate) fn rebase(self, base: usize) -> Error {
        match self {
            Error::TypeMismatch {
                offset,
                expected,
                found,
            } => Error::TypeMismatch {
                offset: offset + base,
                expected,
                found,
            },
            Error::Exhausted {
                offset,
                needed,
                remaining,
            } => Error::Exhausted {
                offset: offset + base,
                needed,
                remaining,
            },
            Error::InvalidText { offset } => Error::InvalidText {
                offset: offset + base,
            },
            other => other,
        }
    }

    /// True for faults caused by reading past the end of the buffer.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::Exhausted { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebase_shifts_offsets() {
        let err = Error::Exhausted {
            offset: 2,
            needed: 4,
            remaining: 1,
        }
        .rebase(10);
        assert_eq!(
            err,
            Error::Exhausted {
                offset: 12,
                needed: 4,
                remaining: 1
            }
        );

        let err = Error::InteriorNul { position: 3 }.rebase(10);
        assert_eq!(err, Error::InteriorNul { position: 3 });
    }

    #[test]
    fn display_uses_hex_offsets() {
        let err = Error::TypeMismatch {
            offset: 0x1f,
            expected: Tag::new(2),
            found: Tag::new(5),
        };
        assert_eq!(
            err.to_string(),
            "type mismatch at offset 0x1f: expected tag 2, found tag 5"
        );
    }
}
