use crate::{
    error::ErrorKind,
    snbt::{from_str, to_string, to_string_with_opts},
    ByteArray, Compound, IntArray, LongArray, NbtData, StringifyOptions, Value,
};

fn compound(entries: Vec<(&str, Value)>) -> Value {
    Value::Compound(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect::<Compound>(),
    )
}

fn pretty(v: &Value, indent: &str) -> String {
    to_string_with_opts(v, StringifyOptions::new().indent(indent)).unwrap()
}

#[test]
fn scalars() {
    assert_eq!(to_string(&Value::Byte(-1)).unwrap(), "-1b");
    assert_eq!(to_string(&Value::Short(2)).unwrap(), "2s");
    assert_eq!(to_string(&Value::Int(3)).unwrap(), "3");
    assert_eq!(to_string(&Value::Long(4)).unwrap(), "4l");
    assert_eq!(to_string(&Value::Float(1.5)).unwrap(), "1.5f");
    assert_eq!(to_string(&Value::Double(2.0)).unwrap(), "2.0");
    assert_eq!(to_string(&Value::Boolean(true)).unwrap(), "true");
    assert_eq!(to_string(&Value::String("x".to_owned())).unwrap(), "\"x\"");
}

#[test]
fn whole_floats_keep_their_point() {
    assert_eq!(from_str(&to_string(&Value::Double(100.0)).unwrap()).unwrap(), Value::Double(100.0));
    assert_eq!(from_str(&to_string(&Value::Float(-3.0)).unwrap()).unwrap(), Value::Float(-3.0));
    assert_eq!(from_str(&to_string(&Value::Double(1e300)).unwrap()).unwrap(), Value::Double(1e300));
    assert_eq!(from_str(&to_string(&Value::Float(1e-30)).unwrap()).unwrap(), Value::Float(1e-30));
}

#[test]
fn non_finite_floats_read_back() {
    assert_eq!(to_string(&Value::Float(f32::INFINITY)).unwrap(), "inff");
    assert_eq!(to_string(&Value::Double(f64::NEG_INFINITY)).unwrap(), "-infd");
    assert_eq!(to_string(&Value::Double(f64::NAN)).unwrap(), "NaNd");

    for v in [Value::Float(f32::NEG_INFINITY), Value::Double(f64::INFINITY)] {
        assert_eq!(from_str(&to_string(&v).unwrap()).unwrap(), v);
    }

    let text = to_string(&Value::List(vec![Value::Float(f32::NAN)])).unwrap();
    match from_str(&text).unwrap() {
        Value::List(l) => assert!(matches!(l.as_slice(), [Value::Float(v)] if v.is_nan()), "{}", text),
        other => panic!("expected a list, got {:?}", other),
    }
}

#[test]
fn quote_choice() {
    let s = |v: &str| to_string(&Value::String(v.to_owned())).unwrap();

    assert_eq!(s("plain"), r#""plain""#);
    assert_eq!(s("It's"), r#""It's""#);
    assert_eq!(s(r#"say "hi""#), r#"'say "hi"'"#);
    assert_eq!(s(r#"It's "quoted""#), r#"'It\'s "quoted"'"#);
    // Equal counts stay with double quotes.
    assert_eq!(s(r#"a'b"c"#), r#""a'b\"c""#);
    assert_eq!(s("a\\b\n"), r#""a\\b\n""#);
    assert_eq!(s(""), r#""""#);
}

#[test]
fn quoted_strings_round_trip() {
    for v in [r#"It's "quoted""#, "''\"", "tab\there", "back\\slash", "☃ \u{8}\u{c}\r"] {
        let value = Value::String(v.to_owned());
        assert_eq!(from_str(&to_string(&value).unwrap()).unwrap(), value, "{:?}", v);
    }
}

#[test]
fn keys_quoted_only_when_needed() {
    let v = compound(vec![
        ("plain_key", Value::Int(1)),
        ("with space", Value::Int(2)),
        ("", Value::Int(3)),
        ("minecraft:stone", Value::Int(4)),
    ]);
    assert_eq!(
        to_string(&v).unwrap(),
        r#"{plain_key:1,"with space":2,"":3,"minecraft:stone":4}"#
    );
}

#[test]
fn arrays() {
    let v = compound(vec![
        ("b", Value::ByteArray(ByteArray::new(vec![1, -2]))),
        ("i", Value::IntArray(IntArray::new(vec![3, 4]))),
        ("l", Value::LongArray(LongArray::new(vec![5]))),
        ("e", Value::IntArray(IntArray::new(vec![]))),
    ]);
    assert_eq!(to_string(&v).unwrap(), "{b:[B;1b,-2b],i:[I;3,4],l:[L;5l],e:[I;]}");
}

#[test]
fn compact_nested() {
    let v = compound(vec![
        ("list", Value::List(vec![Value::Int(1), Value::Int(2)])),
        ("inner", compound(vec![("x", Value::Short(1))])),
        ("empty", Value::List(vec![])),
    ]);
    assert_eq!(to_string(&v).unwrap(), "{list:[1,2],inner:{x:1s},empty:[]}");
}

#[test]
fn empty_containers_ignore_indent() {
    assert_eq!(pretty(&compound(vec![]), "  "), "{}");
    assert_eq!(pretty(&Value::List(vec![]), "  "), "[]");
}

#[test]
fn indented_compound() {
    let v = compound(vec![
        ("a", Value::Int(1)),
        ("b", compound(vec![("c", Value::Byte(2))])),
        ("d", compound(vec![])),
    ]);
    assert_eq!(pretty(&v, "  "), "{\n  a: 1,\n  b: {\n    c: 2b\n  },\n  d: {}\n}");
}

#[test]
fn indented_lists() {
    let v = compound(vec![
        ("nums", Value::List(vec![Value::Int(1), Value::Int(2)])),
        (
            "items",
            Value::List(vec![
                compound(vec![("id", Value::String("stone".to_owned()))]),
                compound(vec![]),
            ]),
        ),
        ("arr", Value::IntArray(IntArray::new(vec![1, 2]))),
    ]);

    let expected = "{\n\
        \tnums: [1, 2],\n\
        \titems: [\n\
        \t\t{\n\
        \t\t\tid: \"stone\"\n\
        \t\t},\n\
        \t\t{}\n\
        \t],\n\
        \tarr: [I;1, 2]\n\
        }";
    assert_eq!(pretty(&v, "\t"), expected);
}

#[test]
fn heterogeneous_list_is_type_mismatch() {
    let v = Value::List(vec![Value::Int(1), Value::String("a".to_owned())]);
    let err = to_string(&v).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TypeMismatch));
}

#[test]
fn accepts_containers() {
    let nbt = NbtData::new(compound(vec![("a", Value::Boolean(false))])).unwrap();
    assert_eq!(to_string(&nbt).unwrap(), "{a:false}");
}

#[test]
fn text_round_trip() {
    let text = r#"{Count:64b,id:"minecraft:diamond_sword",tag:{Damage:0,Enchantments:[{id:"minecraft:sharpness",lvl:5s}],display:{Name:'{"text":"Sword"}'}},pos:[L;1l,-2l],weights:[0.5f,1.0f]}"#;
    let value = from_str(text).unwrap();
    assert_eq!(to_string(&value).unwrap(), text);

    let pretty_text = pretty(&value, "    ");
    assert_eq!(from_str(&pretty_text).unwrap(), value);
}
