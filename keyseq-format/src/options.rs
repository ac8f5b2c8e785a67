use crate::codec::FloatLayout;

/// Configuration shared by the writer that produced a record and the reader
/// consuming it. Both sides must agree on the float layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
    float_layout: FloatLayout,
    capacity: usize,
}

impl Options {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub const fn new() -> Self {
        Self {
            float_layout: FloatLayout::Ordered,
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Set the bit layout used for `f64` payloads.
    pub fn with_float_layout(mut self, float_layout: FloatLayout) -> Self {
        self.float_layout = float_layout;
        self
    }

    /// Set the initial buffer capacity of a writer.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[inline]
    pub fn float_layout(&self) -> FloatLayout {
        self.float_layout
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let options = Options::new();
        assert_eq!(options.float_layout(), FloatLayout::Ordered);
        assert_eq!(options.capacity(), Options::DEFAULT_CAPACITY);

        let options = options
            .with_float_layout(FloatLayout::Negated)
            .with_capacity(0);
        assert_eq!(options.float_layout(), FloatLayout::Negated);
        assert_eq!(options.capacity(), 0);
    }
}
