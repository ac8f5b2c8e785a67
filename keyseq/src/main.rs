use std::cmp::Ordering;

use anyhow::Context;
use keyseq_format::{
    BuiltinKind, FloatLayout, Options, Primitive, Primitives, Record, RecordWriter, Registry,
};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod error;

use error::{Error, Result};

/// Parses `kind:value`, e.g. `i32:-7`, `f64:0.5` or `text:hello`.
fn parse_value(src: &str) -> Result<Primitive> {
    let (kind, value) = src
        .split_once(':')
        .ok_or_else(|| Error::MissingKind(src.to_string()))?;
    let kind = BuiltinKind::from_name(kind).ok_or_else(|| Error::UnknownKind(kind.to_string()))?;

    macro_rules! int {
        ($variant:ident) => {
            value
                .parse()
                .map(Primitive::$variant)
                .map_err(|source| Error::InvalidInt {
                    kind: kind.name(),
                    value: value.to_string(),
                    source,
                })
        };
    }

    match kind {
        BuiltinKind::I8 => int!(I8),
        BuiltinKind::I16 => int!(I16),
        BuiltinKind::I32 => int!(I32),
        BuiltinKind::I64 => int!(I64),
        BuiltinKind::F64 => value
            .parse()
            .map(Primitive::F64)
            .map_err(|source| Error::InvalidFloat {
                value: value.to_string(),
                source,
            }),
        BuiltinKind::Text => Ok(Primitive::Text(value.to_string())),
    }
}

fn parse_hex(src: &str) -> Result<Vec<u8>> {
    hex::decode(src.trim()).map_err(|source| Error::InvalidHex {
        input: src.to_string(),
        source,
    })
}

#[derive(Debug, StructOpt)]
enum Commands {
    #[structopt(name = "e", visible_alias = "encode", about = "Encode values into a record")]
    Encode {
        #[structopt(
            name = "kind:value",
            required = true,
            parse(try_from_str = parse_value),
            help = "Values to append in order [kinds: i8, i16, i32, i64, f64, text]"
        )]
        values: Vec<Primitive>,
    },

    #[structopt(name = "d", visible_alias = "decode", about = "Decode the values of a record")]
    Decode {
        #[structopt(name = "hex", help = "Hex-encoded record")]
        record: String,
    },

    #[structopt(name = "cmp", visible_alias = "compare", about = "Compare two records byte-wise")]
    Compare {
        #[structopt(name = "left", help = "Hex-encoded record")]
        left: String,

        #[structopt(name = "right", help = "Hex-encoded record")]
        right: String,
    },

    #[structopt(name = "kinds", about = "List the built-in kinds and their tags")]
    Kinds,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "keyseq")]
struct CliOpts {
    #[structopt(short, long, global = true, help = "Log codec activity to stderr")]
    verbose: bool,

    #[structopt(
        long,
        global = true,
        help = "Store f64 as the bits of its negation [orders non-negative values only]"
    )]
    legacy_floats: bool,

    #[structopt(subcommand)]
    cmd: Commands,
}

impl CliOpts {
    fn options(&self) -> Options {
        let layout = if self.legacy_floats {
            FloatLayout::Negated
        } else {
            FloatLayout::Ordered
        };
        Options::new().with_float_layout(layout)
    }
}

fn encode(values: &[Primitive], options: Options) -> anyhow::Result<String> {
    let mut writer: RecordWriter = RecordWriter::with_options(options);
    for (index, value) in values.iter().enumerate() {
        writer
            .write_primitive(value)
            .with_context(|| format!("Cannot encode value #{} `{}`", index + 1, value))?;
    }
    Ok(hex::encode(writer.into_bytes()))
}

fn decode(bytes: Vec<u8>, options: Options) -> anyhow::Result<Vec<String>> {
    let mut record: Record = Record::from_vec_with(bytes, options);
    let mut lines = vec![];

    while !record.is_exhausted() {
        let offset = record.position();
        let value = record
            .read_primitive()
            .with_context(|| format!("Cannot decode value at offset {:#x}", offset))?;
        lines.push(format!("{:#06x}  {}", offset, value));
    }

    Ok(lines)
}

fn compare(left: Vec<u8>, right: Vec<u8>) -> &'static str {
    let left: Record = Record::from_vec(left);
    let right: Record = Record::from_vec(right);
    match left.cmp(&right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

fn kinds() -> anyhow::Result<Vec<String>> {
    let registry = Registry::of::<Primitives>()?;
    Ok(registry
        .iter()
        .map(|kind| {
            format!(
                "{:>3}  {:#04x}  {}",
                kind.tag().get(),
                (kind.tag().get() as u8).wrapping_add(0x80),
                kind.name()
            )
        })
        .collect())
}

fn run(opts: CliOpts) -> anyhow::Result<()> {
    let options = opts.options();
    tracing::debug!(?options, "running");

    match opts.cmd {
        Commands::Encode { values } => println!("{}", encode(&values, options)?),
        Commands::Decode { record } => {
            for line in decode(parse_hex(&record)?, options)? {
                println!("{}", line);
            }
        }
        Commands::Compare { left, right } => {
            println!("{}", compare(parse_hex(&left)?, parse_hex(&right)?))
        }
        Commands::Kinds => {
            for line in kinds()? {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn main() {
    let opts = CliOpts::from_args();

    let filter = if opts.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(opts) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{:?}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_kind() {
        assert_eq!(parse_value("i8:-5").unwrap(), Primitive::I8(-5));
        assert_eq!(parse_value("i16:300").unwrap(), Primitive::I16(300));
        assert_eq!(parse_value("i32:345").unwrap(), Primitive::I32(345));
        assert_eq!(parse_value("i64:-1").unwrap(), Primitive::I64(-1));
        assert_eq!(parse_value("f64:3.45").unwrap(), Primitive::F64(3.45));
        assert_eq!(
            parse_value("text:a:b").unwrap(),
            Primitive::Text("a:b".to_string())
        );
        assert_eq!(parse_value("text:").unwrap(), Primitive::Text(String::new()));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(parse_value("345"), Err(Error::MissingKind(_))));
        assert!(matches!(parse_value("u32:1"), Err(Error::UnknownKind(k)) if k == "u32"));
        assert!(matches!(
            parse_value("i8:300"),
            Err(Error::InvalidInt { kind: "i8", .. })
        ));
        assert!(matches!(
            parse_value("f64:abc"),
            Err(Error::InvalidFloat { .. })
        ));
        assert!(matches!(parse_hex("8g"), Err(Error::InvalidHex { .. })));
    }

    #[test]
    fn encode_then_decode() {
        let values = vec![
            Primitive::I32(345),
            Primitive::Text("abc".into()),
            Primitive::F64(-1.5),
        ];
        let encoded = encode(&values, Options::new()).unwrap();
        assert!(encoded.starts_with("828000015985"));

        let lines = decode(hex::decode(encoded).unwrap(), Options::new()).unwrap();
        assert_eq!(
            lines,
            vec!["0x0000  i32:345", "0x0005  text:abc", "0x000a  f64:-1.5"]
        );
    }

    #[test]
    fn encode_rejects_interior_nul() {
        let values = vec![Primitive::Text("a\0b".into())];
        assert!(encode(&values, Options::new()).is_err());
    }

    #[test]
    fn decode_reports_truncation() {
        assert!(decode(vec![0x82, 0x80, 0x00], Options::new()).is_err());
    }

    #[test]
    fn compares_numerically() {
        let a = hex::decode(encode(&[Primitive::I32(454543)], Options::new()).unwrap()).unwrap();
        let b = hex::decode(encode(&[Primitive::I32(-31343)], Options::new()).unwrap()).unwrap();
        assert_eq!(compare(a.clone(), b.clone()), ">");
        assert_eq!(compare(b.clone(), a.clone()), "<");
        assert_eq!(compare(a.clone(), a), "=");
    }

    #[test]
    fn lists_builtin_kinds() {
        let lines = kinds().unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "  0  0x80  i8");
        assert_eq!(lines[5], "  5  0x85  text");
    }
}
