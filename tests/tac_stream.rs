use std::sync::mpsc;

use rillet::{Context, Record, RecordAndContext, RecordMapper, Tac, Value};

fn record(n: i64, nr: u64) -> RecordAndContext {
    let mut rec = Record::new();
    rec.put("a", Value::from_inferred_string(&n.to_string()));
    RecordAndContext::new(
        rec,
        Context {
            filename: "stream".to_string(),
            nr,
            fnr: nr,
        },
    )
}

fn field_a(rc: &RecordAndContext) -> i64 {
    match rc.record.as_ref().and_then(|rec| rec.get("a")) {
        Some(Value::Int { val, .. }) => *val,
        other => panic!("expected int field a, got {:?}", other),
    }
}

#[test]
fn tac_reverses_the_stream() {
    let (tx, rx) = mpsc::channel();
    let mut tac = Tac::new();

    for n in 1..=3 {
        tac.map(record(n, n as u64), &tx).unwrap();
    }
    let final_context = Context {
        filename: "stream".to_string(),
        nr: 3,
        fnr: 3,
    };
    tac.map(RecordAndContext::end_of_stream(final_context.clone()), &tx)
        .unwrap();
    drop(tx);

    let out: Vec<RecordAndContext> = rx.iter().collect();
    assert_eq!(out.len(), 4);
    assert_eq!(field_a(&out[0]), 3);
    assert_eq!(field_a(&out[1]), 2);
    assert_eq!(field_a(&out[2]), 1);
    assert!(out[3].is_end_of_stream());
    assert_eq!(out[3].context, final_context);
}

#[test]
fn tac_on_empty_input_emits_only_end_of_stream() {
    let (tx, rx) = mpsc::channel();
    let mut tac = Tac::new();

    tac.map(RecordAndContext::end_of_stream(Context::default()), &tx)
        .unwrap();
    drop(tx);

    let out: Vec<RecordAndContext> = rx.iter().collect();
    assert_eq!(out.len(), 1);
    assert!(out[0].is_end_of_stream());
}

#[test]
fn tac_output_feeds_a_second_tac_back_to_original_order() {
    let (tx1, rx1) = mpsc::channel();
    let mut first = Tac::new();
    for n in 1..=3 {
        first.map(record(n, n as u64), &tx1).unwrap();
    }
    first
        .map(RecordAndContext::end_of_stream(Context::default()), &tx1)
        .unwrap();
    drop(tx1);

    let (tx2, rx2) = mpsc::channel();
    let mut second = Tac::new();
    for rc in rx1.iter() {
        second.map(rc, &tx2).unwrap();
    }
    drop(tx2);

    let out: Vec<RecordAndContext> = rx2.iter().collect();
    assert_eq!(out.len(), 4);
    assert_eq!(field_a(&out[0]), 1);
    assert_eq!(field_a(&out[1]), 2);
    assert_eq!(field_a(&out[2]), 3);
    assert!(out[3].is_end_of_stream());
}
