//! Table-driven tests for the typed checks.

use std::collections::BTreeSet;

use ensured::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// COLLECTIONS
// ============================================================================

#[test]
fn array_is_not_empty() {
    let array = ["Hello"];
    assert_eq!(that!(array).is_not_empty(), Ok(["Hello"]));

    let array: [&str; 0] = [];
    let err = that!(array).is_not_empty().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FailedCondition);
    assert_eq!(err.message(), "Expected the array to have an item.");
    assert_eq!(err.param_name(), Some("array"));
}

#[rstest]
#[case(vec!["Hello"], 1, true)]
#[case(vec![], 1, false)]
#[case(vec!["a", "b"], 2, true)]
#[case(vec!["a", "b"], 3, false)]
fn array_count_is(#[case] items: Vec<&str>, #[case] count: usize, #[case] passes: bool) {
    assert_eq!(that!(items).count_is(count).is_ok(), passes);
}

#[test]
fn array_count_message() {
    let items: Vec<u8> = Vec::new();
    let err = that!(items).count_is(1).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Expected the array to have <1> items, it has <0> items. (parameter 'items')"
    );
}

#[test]
fn collection_contains() {
    let tags: BTreeSet<&str> = ["a", "b"].into_iter().collect();
    assert!(that!(&tags).contains("a").is_ok());

    let err = that!(&tags).contains("z").unwrap_err();
    assert_eq!(
        err.message(),
        r#"Expected to find <"z"> in the collection of <&str>"#
    );
    assert_eq!(err.param_name(), Some("tags"));
}

#[test]
fn missing_collection_is_null() {
    let items: Option<Vec<i32>> = None;
    let err = that!(items).count_is(0).unwrap_err();
    assert!(err.is_null_argument());
    assert_eq!(err.param_name(), Some("items"));
}

// ============================================================================
// BOOLEANS
// ============================================================================

#[rstest]
#[case(Some(true), true, false)]
#[case(Some(false), false, true)]
#[case(None, true, true)]
fn nullable_boolean_or_null(
    #[case] flag: Option<bool>,
    #[case] true_or_null: bool,
    #[case] false_or_null: bool,
) {
    assert_eq!(that!(flag).is_true_or_null().is_ok(), true_or_null);
    assert_eq!(that!(flag).is_false_or_null().is_ok(), false_or_null);
}

#[test]
fn boolean_message_override() {
    let enabled = false;
    let err = that!(enabled)
        .with_message("the feature must be enabled")
        .is_true()
        .unwrap_err();
    assert_eq!(err.message(), "the feature must be enabled");
    assert_eq!(err.param_name(), Some("enabled"));
}

// ============================================================================
// NUMBERS
// ============================================================================

#[rstest]
#[case(7, true)]
#[case(2, true)]
#[case(97, true)]
#[case(8, false)]
#[case(1, false)]
#[case(0, false)]
#[case(-7, false)]
#[case(-1, false)]
fn is_prime(#[case] value: i64, #[case] prime: bool) {
    assert_eq!(that!(value).is_prime().is_ok(), prime);
}

#[rstest]
#[case(5, true)]
#[case(1, true)]
#[case(9, true)]
#[case(0, false)]
#[case(10, false)]
#[case(-3, false)]
fn is_in_range_is_exclusive(#[case] value: i32, #[case] inside: bool) {
    assert_eq!(that!(value).is_in_range(0, 10).is_ok(), inside);
}

#[rstest]
#[case(4, true, false)]
#[case(-3, false, true)]
#[case(0, true, false)]
fn parity(#[case] value: i16, #[case] even: bool, #[case] odd: bool) {
    assert_eq!(that!(value).is_even().is_ok(), even);
    assert_eq!(that!(value).is_odd().is_ok(), odd);
}

#[test]
fn numeric_messages() {
    let value = 3.5_f64;
    let err = that!(value).is_less_than(1.0).unwrap_err();
    assert_eq!(err.message(), "Expected <3.5> to be less than <1>");

    let value = 2_u64;
    let err = that!(value).is_more_than(2).unwrap_err();
    assert_eq!(err.message(), "Expected <2> to be more than <2>");
}

#[test]
fn nullable_numbers() {
    let limit: Option<u32> = None;
    assert_eq!(that!(limit).is_in_range_or_null(0, 10), Ok(None));
    assert!(that!(limit).is_in_range(0, 10).unwrap_err().is_null_argument());

    let limit = Some(11_u32);
    assert_eq!(that!(limit).is_prime(), Ok(Some(11)));
    assert_eq!(that!(limit).is_odd(), Ok(Some(11)));

    let limit = Some(12_u32);
    let err = that!(limit).is_prime().unwrap_err();
    assert!(err.is_failed_condition());
    assert_eq!(err.message(), "Expected <12> to be a prime number");
}

// ============================================================================
// STRINGS
// ============================================================================

#[rstest]
#[case("42", true)]
#[case("-2147483648", true)]
#[case(" 17 ", true)]
#[case("2147483648", false)]
#[case("4.2", false)]
#[case("", false)]
#[case("abc", false)]
fn is_number(#[case] text: &str, #[case] number: bool) {
    assert_eq!(that!(text).is_number().is_ok(), number);
}

#[rstest]
#[case("", false)]
#[case("   ", false)]
#[case(" a ", true)]
fn is_not_empty_or_whitespace(#[case] text: &str, #[case] passes: bool) {
    assert_eq!(that!(text).is_not_empty_or_whitespace().is_ok(), passes);
}

#[test]
fn string_chain() {
    fn parse_sku(sku: &str) -> EnsureResult<&str> {
        let sku = that!(sku).starts_with("SKU-")?;
        let sku = that!(sku).does_not_contain(" ")?;
        that!(sku).is_match(r"^SKU-\d{6}$")
    }

    assert_eq!(parse_sku("SKU-123456"), Ok("SKU-123456"));

    let err = parse_sku("SKU-12 456").unwrap_err();
    assert_eq!(err.message(), "Expected <SKU-12 456> not to contain < >");

    let err = parse_sku("SKU-12").unwrap_err();
    assert_eq!(err.message(), r"Expected <SKU-12> to match <^SKU-\d{6}$>");
    assert_eq!(err.param_name(), Some("sku"));
}

#[test]
fn string_has_length() {
    let code = String::from("ÄÖÜ");
    assert!(that!(&code).has_length(3).is_ok());

    let err = that!(code).has_length(6).unwrap_err();
    assert_eq!(err.message(), "Expected length of <ÄÖÜ> is <6>.");
}

#[test]
fn optional_string_null() {
    let title: Option<String> = None;
    let err = that!(title).ends_with("!").unwrap_err();
    assert!(err.is_null_argument());
    assert_eq!(err.param_name(), Some("title"));
}
