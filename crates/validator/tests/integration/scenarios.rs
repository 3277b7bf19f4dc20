use pretty_assertions::assert_eq;
use tagcheck::prelude::*;

// ============================================================================
// PASSING RECORDS
// ============================================================================

#[derive(Record)]
struct NoFields {}

#[derive(Record)]
struct Unit;

#[derive(Record)]
struct Untagged {
    f1: String,
    f2: String,
}

#[derive(Record)]
struct Tagged {
    #[validate("non-empty:10")]
    pub short: String,
    #[validate("non-empty:30")]
    pub long: String,
}

#[test]
fn record_without_fields_is_valid() {
    assert_eq!(validate(&NoFields {}), Ok(()));
    assert_eq!(validate(&Unit), Ok(()));
}

#[test]
fn record_without_rules_is_valid() {
    let record = Untagged {
        f1: String::new(),
        f2: String::new(),
    };
    assert_eq!(validate(&record), Ok(()));
}

#[test]
fn tagged_fields_within_bounds_pass() {
    let record = Tagged {
        short: "abc".into(),
        long: "abcdefghijklmnop".into(),
    };
    assert_eq!(validate(&record), Ok(()));
    assert_eq!(record.validate(), Ok(()));
}

// ============================================================================
// RULE VIOLATIONS
// ============================================================================

#[derive(Record)]
struct WrongLength {
    #[validate("non-empty:10")]
    pub empty: String,
    #[validate("non-empty:10")]
    pub too_long: String,
}

#[test]
fn empty_and_too_long_both_fail() {
    let record = WrongLength {
        empty: String::new(),
        too_long: "abcdefghijklmnop".into(),
    };

    let err = validate(&record).unwrap_err();
    let errors = err.validation_errors().expect("field failures");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.count_kind(ErrorKind::RuleViolation), 2);
    assert_eq!(errors.field_names().collect::<Vec<_>>(), ["empty", "too_long"]);
    assert_eq!(
        err.to_string(),
        "rule violated: text must not be empty\n\
         rule violated: text must be at most 10 characters, got 16\n"
    );
}

#[test]
fn passing_fields_are_not_reported() {
    #[derive(Record)]
    struct Mixed {
        #[validate("non-empty:3")]
        pub ok: String,
        #[validate("non-empty:3")]
        pub bad: String,
        #[validate("non-empty:3")]
        pub also_ok: &'static str,
    }

    let record = Mixed {
        ok: "abc".into(),
        bad: "abcd".into(),
        also_ok: "a",
    };

    let err = validate(&record).unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().and_then(ValidationError::field), Some("bad"));
    // a single failure renders as its own message, with no trailing newline
    assert_eq!(
        err.to_string(),
        "rule violated: text must be at most 3 characters, got 4"
    );
}

#[test]
fn multibyte_characters_count_once() {
    #[derive(Record)]
    struct Greeting {
        #[validate("non-empty:5")]
        pub text: String,
    }

    assert!(validate(&Greeting { text: "h\u{e9}llo".into() }).is_ok());
    let waves = "\u{1f44b}\u{1f30d}\u{1f44b}\u{1f30d}\u{1f44b}";
    assert!(validate(&Greeting { text: waves.into() }).is_ok());
    assert!(validate(&Greeting { text: "h\u{e9}llo!".into() }).is_err());
}

// ============================================================================
// SYNTAX FAILURES
// ============================================================================

#[derive(Record)]
struct BadArguments {
    #[validate("non-empty:abcdef")]
    pub string: String,
    #[validate("non-empty:0")]
    pub zero: String,
    #[validate("non-empty:-10")]
    pub negative: String,
}

#[test]
fn malformed_arguments_are_syntax_errors() {
    let record = BadArguments {
        string: "fine".into(),
        zero: "fine".into(),
        negative: "fine".into(),
    };

    let err = validate(&record).unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.count_kind(ErrorKind::InvalidRuleSyntax), 3);
}

#[derive(Record)]
struct BadDeclarations {
    #[validate("")]
    pub empty_spec: String,
    #[validate("non-empty")]
    pub no_separator: String,
    #[validate("non-empty:")]
    pub no_arguments: String,
    #[validate("non-empty:1,2")]
    pub two_arguments: String,
    #[validate("email:")]
    pub unknown_rule: String,
    #[validate("non-empty:5")]
    pub not_text: u32,
    #[validate("non-empty:5")]
    pub optional_text: Option<String>,
}

#[test]
fn every_malformed_declaration_is_reported_in_order() {
    let record = BadDeclarations {
        empty_spec: "x".into(),
        no_separator: "x".into(),
        no_arguments: "x".into(),
        two_arguments: "x".into(),
        unknown_rule: "x".into(),
        not_text: 1,
        optional_text: None,
    };

    let err = validate(&record).unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.count_kind(ErrorKind::InvalidRuleSyntax), 7);
    assert_eq!(
        errors.field_names().collect::<Vec<_>>(),
        [
            "empty_spec",
            "no_separator",
            "no_arguments",
            "two_arguments",
            "unknown_rule",
            "not_text",
            "optional_text",
        ]
    );
}

#[test]
fn present_optional_text_is_checked() {
    #[derive(Record)]
    struct Nickname {
        #[validate("non-empty:4")]
        pub nick: Option<String>,
    }

    assert!(validate(&Nickname { nick: Some("neo".into()) }).is_ok());
    let err = validate(&Nickname { nick: Some(String::new()) }).unwrap_err();
    assert!(err.validation_errors().unwrap().contains_kind(ErrorKind::RuleViolation));
}

// ============================================================================
// NON-PUBLIC FIELDS
// ============================================================================

#[derive(Record)]
struct Hidden {
    #[validate("non-empty:10")]
    foo: String,
}

#[test]
fn rule_on_private_field_is_rejected() {
    let err = validate(&Hidden { foo: String::new() }).unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().map(ValidationError::kind), Some(ErrorKind::UnexportedFieldTagged));
    assert_eq!(err.to_string(), ErrorKind::UnexportedFieldTagged.message());
}

#[test]
fn restricted_visibility_is_not_public() {
    #[derive(Record)]
    struct Internal {
        #[validate("non-empty:10")]
        pub(crate) name: String,
        #[validate("not even parsed")]
        pub(super) other: String,
    }

    let record = Internal {
        name: "ok".into(),
        other: "ok".into(),
    };
    let err = validate(&record).unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.count_kind(ErrorKind::UnexportedFieldTagged), 2);
}

#[test]
fn untagged_private_fields_are_ignored() {
    #[derive(Record)]
    struct Account {
        #[validate("non-empty:8")]
        pub login: String,
        password_hash: Vec<u8>,
    }

    let record = Account {
        login: "root".into(),
        password_hash: vec![0; 32],
    };
    assert!(validate(&record).is_ok());
}

#[test]
fn untagged_fields_of_any_type_are_not_read() {
    use std::marker::PhantomData;
    use std::time::Duration;

    #[derive(Record)]
    struct Session<K> {
        #[validate("non-empty:8")]
        pub user: String,
        pub ttl: Duration,
        pub span: (u8, u8),
        kind: PhantomData<K>,
    }

    let session = |user: &str| Session::<std::fs::File> {
        user: user.into(),
        ttl: Duration::from_secs(30),
        span: (1, 2),
        kind: PhantomData,
    };

    assert_eq!(validate(&session("root")), Ok(()));

    let err = validate(&session("")).unwrap_err();
    assert_eq!(err.validation_errors().unwrap().field_names().collect::<Vec<_>>(), ["user"]);

    let record = session("root");
    let fields = record.fields();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[1].value.kind(), ValueKind::Opaque);
    assert!(matches!(fields[1].value, FieldValue::Opaque(name) if name.ends_with("Duration")));
    assert!(matches!(fields[2].value, FieldValue::Opaque(name) if name.contains("u8")));
}

// ============================================================================
// TUPLE AND GENERIC RECORDS
// ============================================================================

#[derive(Record)]
struct Label(#[validate("non-empty:4")] pub String, pub u8);

#[test]
fn tuple_fields_are_named_by_index() {
    assert!(validate(&Label("tag".into(), 1)).is_ok());

    let err = validate(&Label("too long".into(), 1)).unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.field_names().collect::<Vec<_>>(), ["0"]);
}

#[derive(Record)]
struct Envelope<T> {
    #[validate("non-empty:6")]
    pub payload: T,
}

#[test]
fn generic_records_inspect_their_field_type() {
    assert!(validate(&Envelope { payload: "hello" }).is_ok());
    assert!(validate(&Envelope { payload: String::from("goodbye") }).is_err());

    let err = validate(&Envelope { payload: 7_i64 }).unwrap_err();
    assert!(err.validation_errors().unwrap().contains_kind(ErrorKind::InvalidRuleSyntax));
}

#[test]
fn nested_records_are_not_descended_into() {
    #[derive(Record)]
    struct Outer {
        pub inner: Tagged,
    }

    let outer = Outer {
        inner: Tagged {
            short: String::new(),
            long: String::new(),
        },
    };
    assert!(validate(&outer).is_ok());
}

#[test]
fn rule_on_nested_record_field_is_a_kind_mismatch() {
    #[derive(Record)]
    struct Outer {
        #[validate("non-empty:5")]
        pub inner: Unit,
    }

    let err = validate(&Outer { inner: Unit }).unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(
        errors.first().and_then(ValidationError::detail),
        Some("`non-empty` applies to text values, not record")
    );
}

#[cfg(feature = "serde")]
#[test]
fn json_report_lists_every_failure() {
    let record = WrongLength {
        empty: String::new(),
        too_long: "x".repeat(11),
    };
    let err = validate(&record).unwrap_err();
    let report = err.validation_errors().unwrap().to_json_value();

    assert_eq!(report[0]["field"], "empty");
    assert_eq!(report[0]["code"], "rule_violation");
    assert_eq!(report[1]["field"], "too_long");
    assert_eq!(report[1]["rule"], "non-empty");
}
