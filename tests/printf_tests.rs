//! Integration tests for the template formatter.

use kindred::prelude::*;

#[test]
fn mixed_templates_render_in_one_pass() {
    let rendered = printf(
        "%s is %d years old (%.1f%% done, badge %c, raw %j)",
        &[
            Value::str("ada"),
            Value::Number(36.0),
            Value::Number(42.5),
            Value::Number(0x2713 as f64),
            Value::array([Value::Number(1.0), Value::Null]),
        ],
    );
    assert_eq!(
        rendered.as_deref(),
        Ok("ada is 36 years old (42.5% done, badge \u{2713}, raw [1.0,null])")
    );
}

#[test]
fn every_kind_renders_through_s() {
    let rendered = printf(
        "%s|%s|%s|%s|%s|%s|%s",
        &[
            Value::Undefined,
            Value::Null,
            Value::Bool(false),
            Value::Number(f64::NEG_INFINITY),
            Value::regexp("a|b"),
            Value::symbol("mark"),
            Value::function("go"),
        ],
    );
    assert_eq!(
        rendered.as_deref(),
        Ok("undefined|null|false|-Infinity|/a|b/|Symbol(mark)|[Function go]")
    );
}

#[test]
fn surplus_arguments_are_ignored_without_error() {
    let rendered = printf("just %s", &[Value::str("one"), Value::str("two"), Value::Null]);
    assert_eq!(rendered.as_deref(), Ok("just one"));
}

#[test]
fn failures_name_the_directive_and_argument() {
    assert_eq!(
        printf("%d%d", &[Value::Number(1.0)]),
        Err(FormatError::MissingArgument {
            conversion: 'd',
            index: 1
        })
    );
    assert_eq!(
        printf("ok %f", &[Value::Bool(true)]),
        Err(FormatError::WrongKind {
            conversion: 'f',
            index: 0,
            actual: Kind::Boolean
        })
    );
    // Nothing is emitted on failure.
    assert!(printf("%s %q", &[Value::Null, Value::Null]).is_err());
}

#[test]
fn date_arguments_format_through_the_namespace_rendering() {
    // %j carries the calendar form; %s carries the raw-timestamp form.
    let date = Value::Date(0);
    assert_eq!(
        printf("%j / %s", &[date.clone(), date]).as_deref(),
        Ok("\"1970-01-01T00:00:00.000Z\" / [Date 0]")
    );
}
