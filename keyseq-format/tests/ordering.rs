use keyseq_format::codec::{
    decode_f64, decode_int, decode_text, encode_f64, encode_int, encode_text, OrderedInt,
};
use keyseq_format::{ByteBuffer, FloatLayout, Primitive, Record, RecordWriter};
use proptest::prelude::*;

fn int_bytes<I: OrderedInt>(value: I) -> Vec<u8> {
    let mut buf = ByteBuffer::new();
    encode_int(&mut buf, value);
    buf.into_vec()
}

fn f64_bytes(value: f64, layout: FloatLayout) -> Vec<u8> {
    let mut buf = ByteBuffer::new();
    encode_f64(&mut buf, value, layout);
    buf.into_vec()
}

fn arb_layout() -> impl Strategy<Value = FloatLayout> {
    prop_oneof![Just(FloatLayout::Ordered), Just(FloatLayout::Negated)]
}

fn arb_primitive() -> impl Strategy<Value = Primitive> {
    prop_oneof![
        any::<i8>().prop_map(Primitive::I8),
        any::<i16>().prop_map(Primitive::I16),
        any::<i32>().prop_map(Primitive::I32),
        any::<i64>().prop_map(Primitive::I64),
        proptest::num::f64::NORMAL.prop_map(Primitive::F64),
        "[^\\x00]{0,16}".prop_map(Primitive::Text),
    ]
}

proptest! {
    #[test]
    fn i8_order_preserved(a in any::<i8>(), b in any::<i8>()) {
        prop_assert_eq!(a.cmp(&b), int_bytes(a).cmp(&int_bytes(b)));
    }

    #[test]
    fn i16_order_preserved(a in any::<i16>(), b in any::<i16>()) {
        prop_assert_eq!(a.cmp(&b), int_bytes(a).cmp(&int_bytes(b)));
    }

    #[test]
    fn i32_order_preserved(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(a.cmp(&b), int_bytes(a).cmp(&int_bytes(b)));
    }

    #[test]
    fn i64_order_preserved(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(a.cmp(&b), int_bytes(a).cmp(&int_bytes(b)));
    }

    #[test]
    fn ints_round_trip(a in any::<i8>(), b in any::<i16>(), c in any::<i32>(), d in any::<i64>()) {
        prop_assert_eq!(decode_int::<i8>(&int_bytes(a)).unwrap(), (a, 1));
        prop_assert_eq!(decode_int::<i16>(&int_bytes(b)).unwrap(), (b, 2));
        prop_assert_eq!(decode_int::<i32>(&int_bytes(c)).unwrap(), (c, 4));
        prop_assert_eq!(decode_int::<i64>(&int_bytes(d)).unwrap(), (d, 8));
    }

    #[test]
    fn non_negative_doubles_order_preserved(
        a in 0.0f64..f64::MAX,
        b in 0.0f64..f64::MAX,
        layout in arb_layout(),
    ) {
        let (ea, eb) = (f64_bytes(a, layout), f64_bytes(b, layout));
        prop_assert_eq!(a < b, ea < eb);
        prop_assert_eq!(a == b, ea == eb);
    }

    #[test]
    fn ordered_layout_treats_zeros_alike(
        a in prop_oneof![Just(-0.0f64), Just(0.0f64), 0.0f64..f64::MAX],
        b in prop_oneof![Just(-0.0f64), Just(0.0f64), 0.0f64..f64::MAX],
    ) {
        let (ea, eb) = (f64_bytes(a, FloatLayout::Ordered), f64_bytes(b, FloatLayout::Ordered));
        prop_assert_eq!(a < b, ea < eb);
        prop_assert_eq!(a == b, ea == eb);
    }

    #[test]
    fn non_negative_above_negative(
        a in 0.0f64..f64::MAX,
        b in f64::MIN..-f64::MIN_POSITIVE,
        layout in arb_layout(),
    ) {
        prop_assert!(f64_bytes(a, layout) > f64_bytes(b, layout));
    }

    #[test]
    fn ordered_layout_is_total(a in any::<f64>(), b in any::<f64>()) {
        prop_assume!(!a.is_nan() && !b.is_nan());
        prop_assume!(a != b);
        let (ea, eb) = (f64_bytes(a, FloatLayout::Ordered), f64_bytes(b, FloatLayout::Ordered));
        prop_assert_eq!(a < b, ea < eb);
    }

    #[test]
    fn doubles_round_trip(value in any::<f64>(), layout in arb_layout()) {
        let bytes = f64_bytes(value, layout);
        prop_assert_eq!(bytes.len(), 8);
        let (decoded, consumed) = decode_f64(&bytes, layout).unwrap();
        prop_assert_eq!(consumed, 8);
        if value.is_nan() {
            prop_assert!(decoded.is_nan());
        } else if value == 0.0 && layout == FloatLayout::Ordered {
            prop_assert_eq!(decoded.to_bits(), 0.0f64.to_bits());
        } else {
            prop_assert_eq!(decoded.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn text_round_trip(text in "[^\\x00]{0,64}") {
        let mut buf = ByteBuffer::new();
        prop_assert_eq!(encode_text(&mut buf, &text).unwrap(), text.len() + 1);
        let (decoded, consumed) = decode_text(buf.as_slice()).unwrap();
        prop_assert_eq!(decoded, text.as_str());
        prop_assert_eq!(consumed, text.len() + 1);
    }

    #[test]
    fn records_replay_any_sequence(values in proptest::collection::vec(arb_primitive(), 0..12)) {
        let mut writer: RecordWriter = RecordWriter::new();
        for value in &values {
            writer.write_primitive(value).unwrap();
        }
        let mut record: Record = writer.finish();
        let decoded: Vec<Primitive> = record.values().collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(decoded, values);
        prop_assert!(record.is_exhausted());
    }

    #[test]
    fn same_kind_records_compare_like_values(a in any::<i32>(), b in any::<i32>()) {
        let mut left: RecordWriter = RecordWriter::new();
        left.write(&a).unwrap();
        let mut right: RecordWriter = RecordWriter::new();
        right.write(&b).unwrap();
        prop_assert_eq!(a.cmp(&b), left.cmp(&right));
    }
}
