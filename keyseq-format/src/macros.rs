/// Define a catalogue: a marker type naming an ordered set of custom kinds.
///
/// Each kind is either listed alone, in which case it must implement
/// [`Serializable`](crate::Serializable) for the catalogue, or listed with a
/// pair of free functions that encode and decode it:
///
/// ```
/// use keyseq_format::{catalogue, Record, RecordWriter, Result, Serializable};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// struct Celsius(f64);
///
/// fn write_celsius(value: &Celsius, writer: &mut RecordWriter<Shapes>) -> Result<()> {
///     writer.write(&value.0)
/// }
///
/// fn read_celsius(record: &mut Record<Shapes>) -> Result<Celsius> {
///     Ok(Celsius(record.read()?))
/// }
///
/// catalogue! {
///     pub struct Shapes {
///         Point,
///         Celsius => with(write_celsius, read_celsius),
///     }
/// }
///
/// impl Serializable<Shapes> for Point {
///     fn serialize(&self, writer: &mut RecordWriter<Shapes>) -> Result<()> {
///         writer.write(&self.x)?;
///         writer.write(&self.y)
///     }
///
///     fn deserialize(record: &mut Record<Shapes>) -> Result<Self> {
///         Ok(Point {
///             x: record.read()?,
///             y: record.read()?,
///         })
///     }
/// }
///
/// let mut writer = RecordWriter::<Shapes>::new();
/// writer.write(&Point { x: 1, y: 2 }).unwrap();
/// writer.write(&Celsius(21.5)).unwrap();
///
/// let mut record = writer.finish();
/// let point: Point = record.read().unwrap();
/// assert_eq!((point.x, point.y), (1, 2));
/// assert_eq!(record.read::<Celsius>().unwrap().0, 21.5);
/// ```
///
/// Tags are assigned in listing order after the built-in kinds. A catalogue
/// with more kinds than fit in a tag fails to compile.
#[macro_export]
macro_rules! catalogue {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($kinds:tt)*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name;

        impl $crate::Catalogue for $name {
            const CUSTOM_KINDS: &'static [&'static str] = $crate::catalogue!(@names [] $($kinds)*);
        }

        const _: () = assert!(
            $crate::BUILTIN_KINDS + <$name as $crate::Catalogue>::CUSTOM_KINDS.len()
                <= $crate::Tag::MAX_KINDS,
            concat!("catalogue `", stringify!($name), "` holds more kinds than fit in a tag")
        );

        $crate::catalogue!(@kinds $name; 0usize; $($kinds)*);
    };

    (@names [$($names:expr),*]) => {
        &[$($names),*]
    };
    (@names [$($names:expr),*] $kind:ty => with($encode:path, $decode:path) $(, $($rest:tt)*)?) => {
        $crate::catalogue!(@names [$($names,)* stringify!($kind)] $($($rest)*)?)
    };
    (@names [$($names:expr),*] $kind:ty $(, $($rest:tt)*)?) => {
        $crate::catalogue!(@names [$($names,)* stringify!($kind)] $($($rest)*)?)
    };

    (@kinds $cat:ident; $index:expr;) => {};
    (@kinds $cat:ident; $index:expr; $kind:ty => with($encode:path, $decode:path) $(, $($rest:tt)*)?) => {
        impl $crate::Encode<$cat> for $kind {
            const TAG: $crate::Tag = $crate::Tag::custom($index);

            fn encode(&self, writer: &mut $crate::RecordWriter<$cat>) -> $crate::Result<()> {
                $encode(self, writer)
            }
        }

        impl $crate::Decode<$cat> for $kind {
            fn decode(record: &mut $crate::Record<$cat>) -> $crate::Result<Self> {
                $decode(record)
            }
        }

        $crate::catalogue!(@kinds $cat; $index + 1usize; $($($rest)*)?);
    };
    (@kinds $cat:ident; $index:expr; $kind:ty $(, $($rest:tt)*)?) => {
        impl $crate::Encode<$cat> for $kind {
            const TAG: $crate::Tag = $crate::Tag::custom($index);

            fn encode(&self, writer: &mut $crate::RecordWriter<$cat>) -> $crate::Result<()> {
                <$kind as $crate::Serializable<$cat>>::serialize(self, writer)
            }
        }

        impl $crate::Decode<$cat> for $kind {
            fn decode(record: &mut $crate::Record<$cat>) -> $crate::Result<Self> {
                <$kind as $crate::Serializable<$cat>>::deserialize(record)
            }
        }

        $crate::catalogue!(@kinds $cat; $index + 1usize; $($($rest)*)?);
    };
}
