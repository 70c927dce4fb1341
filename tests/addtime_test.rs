use addtime::{AddTime, AddTimeError, ArgPosition, ClockTime, Output};
use serde_json::{json, Value};

fn run(args: &[Value]) -> Result<Output, AddTimeError> {
    AddTime.compute(args)
}

fn text(time: &str, duration: &str) -> String {
    match run(&[json!(time), json!(duration)]).unwrap() {
        Output::Text(s) => s,
        other => panic!("expected text output, got {:?}", other),
    }
}

#[test]
fn test_signature_validation() {
    assert!(matches!(run(&[]), Err(AddTimeError::Arity { given: 0 })));
    assert!(matches!(run(&[json!("0")]), Err(AddTimeError::Arity { given: 1 })));
    assert!(matches!(
        run(&[json!("0"), json!("0"), json!("0"), json!("0")]),
        Err(AddTimeError::Arity { given: 4 })
    ));

    let err = run(&[json!("0")]).unwrap_err();
    assert_eq!(err.to_string(), "wrong number of arguments given (1)");
}

#[test]
fn test_first_argument_format() {
    for time in ["foo", "0:", ":0", "0:0:0:0"] {
        let err = run(&[json!(time), json!("PT1H")]).unwrap_err();
        assert!(
            matches!(err, AddTimeError::Format { position: ArgPosition::First }),
            "{:?} should be a format error, got {:?}",
            time,
            err
        );
        assert_eq!(err.to_string(), "wrong format for first argument");
    }
}

#[test]
fn test_first_argument_range() {
    for time in ["0:60:0", "0:0:60", "24:00:00"] {
        let err = run(&[json!(time), json!("PT1H")]).unwrap_err();
        assert!(matches!(err, AddTimeError::Range), "{:?}", time);
        assert_eq!(err.to_string(), "time argument out of range");
    }
}

#[test]
fn test_first_argument_type() {
    let err = run(&[json!(false), json!("PT1H")]).unwrap_err();
    assert!(matches!(err, AddTimeError::Type { position: ArgPosition::First }));
    assert_eq!(err.to_string(), "wrong type for first argument");
}

#[test]
fn test_second_argument_format() {
    for duration in ["foo", "PT", "PT1"] {
        let err = run(&[json!("00:00:00"), json!(duration)]).unwrap_err();
        assert!(
            matches!(err, AddTimeError::Format { position: ArgPosition::Second }),
            "{:?} should be a format error, got {:?}",
            duration,
            err
        );
        assert_eq!(err.to_string(), "wrong format for second argument");
    }
}

#[test]
fn test_second_argument_ascii_letters_only() {
    let err = run(&[json!("00:00"), json!("PT5\u{17F}")]).unwrap_err();
    assert!(matches!(err, AddTimeError::Format { position: ArgPosition::Second }));
    assert_eq!(text("00:00", "pt5s"), "00:00:05");
}

#[test]
fn test_single_components() {
    assert_eq!(text("00:00:00", "PT1S"), "00:00:01");
    assert_eq!(text("00:00:00", "PT1M"), "00:01:00");
    assert_eq!(text("00:00:00", "PT1H"), "01:00:00");
}

#[test]
fn test_wraparound() {
    assert_eq!(text("23:59:59", "PT1S"), "00:00:00");
    assert_eq!(text("23:59:00", "PT1M"), "00:00:00");
    assert_eq!(text("23:00:00", "PT1H"), "00:00:00");
    assert_eq!(text("00:00:00", "PT24H"), "00:00:00");
    assert_eq!(text("12:00:00", "PT100H"), "16:00:00");
}

#[test]
fn test_combined_components() {
    assert_eq!(text("00:00:00", "PT1H1S"), "01:00:01");
    assert_eq!(text("00:00:00", "PT1M1S"), "00:01:01");
    assert_eq!(text("00:00:00", "PT1H1M"), "01:01:00");
    assert_eq!(text("00:00:00", "PT1H1M1S"), "01:01:01");
    assert_eq!(text("11:03:17", "PT56M43S"), "12:00:00");
}

#[test]
fn test_component_overflow_carries() {
    assert_eq!(text("00:00:00", "PT90S"), "00:01:30");
    assert_eq!(text("00:00:00", "PT61M"), "01:01:00");
    assert_eq!(text("23:30", "PT1H1M3600S"), "01:31:00");
}

#[test]
fn test_triple_output() {
    assert_eq!(
        run(&[json!("00:00"), json!("PT6H"), json!(true)]).unwrap(),
        Output::Triple(6, 0, 0)
    );
    assert_eq!(
        run(&[json!("00:00"), json!("PT6H"), json!(false)]).unwrap(),
        Output::Text("06:00:00".to_string())
    );
}

#[test]
fn test_numeric_time() {
    assert_eq!(
        run(&[json!(5), json!("PT30M")]).unwrap(),
        Output::Text("05:30:00".to_string())
    );
    assert_eq!(
        run(&[json!(23.9), json!("PT1H"), json!(true)]).unwrap(),
        Output::Triple(0, 0, 0)
    );
    assert!(matches!(run(&[json!(24), json!("PT1H")]), Err(AddTimeError::Range)));
}

#[test]
fn test_string_output_shape_and_round_trip() {
    // Stride through the day and a spread of offsets
    for start in (0..86_400u64).step_by(3_607) {
        let time = ClockTime::from_seconds_wrapping(start);
        for offset in [0u64, 1, 59, 61, 3_599, 86_399, 86_401, 1_000_003] {
            let duration = format!("PT{}S", offset);
            let out = text(&time.to_string(), &duration);

            assert_eq!(out.len(), 8);
            let bytes = out.as_bytes();
            assert_eq!((bytes[2], bytes[5]), (b':', b':'));

            let parsed = addtime::parse_time_str(&out).unwrap();
            assert_eq!(parsed.seconds_from_midnight(), (start + offset) % 86_400);
        }
    }
}
