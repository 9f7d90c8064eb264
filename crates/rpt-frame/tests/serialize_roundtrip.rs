//! Round-trip property: serializing a frame preserves every value, row
//! order, and column order (timestamps modulo their ISO-8601 rendering).

use proptest::prelude::*;
use rpt_frame::{Column, Frame, Index, Scalar, serialize_frame};
use serde_json::Value;

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<i64>().prop_map(Scalar::Int),
        (-1.0e12..1.0e12f64).prop_map(Scalar::Float),
        "[a-z]{0,8}".prop_map(Scalar::from),
        Just(Scalar::Null),
    ]
}

fn expected_json(s: &Scalar) -> Value {
    match s {
        Scalar::Int(i) => Value::from(*i),
        Scalar::Float(f) => Value::from(*f),
        Scalar::Str(s) => Value::from(s.as_str()),
        Scalar::Null => Value::Null,
        other => panic!("strategy does not generate {other:?}"),
    }
}

proptest! {
    #[test]
    fn serialize_preserves_values_and_order(
        rows in prop::collection::vec((scalar_strategy(), scalar_strategy(), scalar_strategy()), 0..20)
    ) {
        let index: Vec<Scalar> = rows.iter().map(|(i, _, _)| i.clone()).collect();
        let a: Vec<Scalar> = rows.iter().map(|(_, a, _)| a.clone()).collect();
        let b: Vec<Scalar> = rows.iter().map(|(_, _, b)| b.clone()).collect();

        let frame = Frame::new(
            Index::named("idx", index.clone()),
            vec![Column::new("a", a.clone()), Column::new("b", b.clone())],
        ).unwrap();

        let columns = serialize_frame(&frame);
        prop_assert_eq!(columns.len(), 3);

        for (serialized, source) in columns.iter().zip([&index, &a, &b]) {
            prop_assert_eq!(serialized.values.len(), source.len());
            for (json, scalar) in serialized.values.iter().zip(source.iter()) {
                prop_assert_eq!(json, &expected_json(scalar));
            }
        }
    }
}

#[test]
fn serialized_column_json_shape() {
    let frame = Frame::series(
        Index::named("day", vec![Scalar::from("mon")]),
        Column::new("sales", vec![Scalar::Float(12.5)]),
    )
    .unwrap();

    let json = serde_json::to_value(serialize_frame(&frame)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "day", "values": ["mon"]},
            {"name": "sales", "values": [12.5]},
        ])
    );
}
