use order_record::{parse, parse_with, DataPair, Error, Record, Syntax};

fn pairs(values: &[(u32, f64)]) -> Vec<DataPair> {
    values
        .iter()
        .map(|(index, quantity)| DataPair::new(*index, *quantity))
        .collect()
}

fn assert_record(record: &Record, id: u32, name: &str, items: &[(u32, f64)]) {
    assert_eq!(record.get_id(), id);
    assert_eq!(record.get_name(), name);
    assert_eq!(record.get_declared_count() as usize, items.len());
    assert_eq!(record.get_items(), pairs(items).as_slice());
}

#[test]
fn test_commented_multi_line_record() {
    let parsed = parse(include_str!("../../test_data/hawaiian.txt")).unwrap();

    assert_record(parsed.get_record(), 100, "hawaiian", &[(0, 0.0), (1, 1.1)]);
    assert!(parsed.is_fully_consumed());
}

#[test]
fn test_single_line_records() {
    let parsed = parse(include_str!("../../test_data/bbq_chicken.txt")).unwrap();
    assert_record(
        parsed.get_record(),
        101,
        "bbq chicken",
        &[(0, 0.0), (1, 1.1), (2, 2.2)],
    );
    assert!(parsed.is_fully_consumed());

    let parsed = parse(include_str!("../../test_data/three_cheese.txt")).unwrap();
    assert_record(
        parsed.get_record(),
        102,
        "three cheese",
        &[(0, 0.0), (1, 1.1), (2, 2.2), (3, 3.3)],
    );
}

#[test]
fn test_leading_comments() {
    let input = include_str!("../../test_data/farmhouse.txt");
    let stripped = "101 \"farmhouse\" 3 0 0.0 1 1.1 2 2.2";

    let with_comments = parse(input).unwrap();
    let without_comments = parse(stripped).unwrap();

    assert_eq!(with_comments.get_record(), without_comments.get_record());
    assert_record(
        with_comments.get_record(),
        101,
        "farmhouse",
        &[(0, 0.0), (1, 1.1), (2, 2.2)],
    );
}

#[test]
fn test_trailing_comment_is_not_consumed() {
    let parsed = parse(include_str!("../../test_data/pepperoni.txt")).unwrap();

    assert_record(
        parsed.get_record(),
        103,
        "pepperoni",
        &[(0, 0.0), (1, 1.1), (2, 2.2), (3, 3.3), (4, 4.4)],
    );
    assert!(!parsed.is_fully_consumed());
    assert_eq!(
        parsed.get_trailing().unwrap().get_text(),
        "# Trailing comments not consumed by parser"
    );
}

#[test]
fn test_hashes_inside_name() {
    let parsed = parse(include_str!("../../test_data/hashes.txt")).unwrap();

    assert_record(parsed.get_record(), 104, "pizza#with#hashes#on#top", &[(0, 0.0)]);
    assert!(parsed.is_fully_consumed());

    let parsed = parse("104 \"name#with#hash\" 1 0 0.0").unwrap();
    assert_eq!(parsed.get_record().get_name(), "name#with#hash");
}

#[test]
fn test_too_few_pairs() {
    let err = parse(include_str!("../../test_data/too_few.txt")).unwrap_err();

    assert!(err.is_end_of_input());
    assert_eq!(err.get_expected(), "pair index");
    assert_eq!(err.get_position(), err.get_end());
    assert_eq!(err.to_string(), "Error! Expecting pair index here: \"\"");
}

#[test]
fn test_too_few_pairs_with_trailing_comment() {
    let input = "105 \"calzone\" 3 0 0.0 1 1.1  # third pair missing";
    let err = parse(input).unwrap_err();

    assert!(err.is_end_of_input());
    assert_eq!(err.get_expected(), "pair index");
    assert_eq!(err.get_remainder(), "# third pair missing");

    let err = parse("100 \"x\"  # count follows").unwrap_err();
    assert!(err.is_end_of_input());
    assert_eq!(err.get_expected(), "item count");
}

#[test]
fn test_invalid_syntax_is_rejected() {
    assert!(matches!(
        Syntax::new('"', '"'),
        Err(Error::InvalidSyntax { .. })
    ));
    assert!(Syntax::new(' ', '"').is_err());
}

#[test]
fn test_missing_name() {
    let err = parse("100 hawaiian 2 0 0.0 1 1.1").unwrap_err();

    assert_eq!(
        err.get_error(),
        &Error::UnexpectedToken {
            expected: "quoted string".to_string(),
            position: 4
        }
    );
    assert_eq!(
        err.to_string(),
        "Error! Expecting quoted string here: \"hawaiian 2 0 0.0 1 1.1\""
    );
}

#[test]
fn test_invalid_quantity_is_fatal() {
    let input = "100 \"hawaiian\"\n2\n0 0.0\n1 x";
    let err = parse(input).unwrap_err();

    assert_eq!(err.get_expected(), "pair quantity");
    assert_eq!(err.get_remainder(), "x");
    assert_eq!(err.get_line(), 4);
    assert_eq!(err.get_column(), 3);
}

#[test]
fn test_missing_id_and_empty_input() {
    let err = parse("\"hawaiian\" 2").unwrap_err();
    assert_eq!(err.get_expected(), "id");
    assert!(!err.is_end_of_input());

    let err = parse("  # only a comment\n").unwrap_err();
    assert_eq!(err.get_expected(), "id");
    assert!(err.is_end_of_input());
}

#[test]
fn test_unterminated_name() {
    let err = parse("100 \"hawaiian 2 0 0.0").unwrap_err();

    assert!(err.is_end_of_input());
    assert_eq!(err.get_expected(), "quoted string");
    assert_eq!(err.get_remainder(), "\"hawaiian 2 0 0.0");
}

#[test]
fn test_parse_is_repeatable() {
    let input = include_str!("../../test_data/hawaiian.txt");

    let first = parse(input).unwrap();
    let second = parse(input).unwrap();
    assert_eq!(first, second);

    // a failed parse does not influence the next one
    assert!(parse("1 \"a\" 5 0 0.0").is_err());
    let third = parse(input).unwrap();
    assert_eq!(first.get_record(), third.get_record());
}

#[test]
fn test_custom_syntax() {
    let syntax = Syntax::new(';', '\'').unwrap();
    let input = "; order\n7 'four # cheese' 1 ; pair\n 3 0.5";

    let parsed = parse_with(input, &syntax).unwrap();
    assert_record(parsed.get_record(), 7, "four # cheese", &[(3, 0.5)]);
    assert!(parsed.is_fully_consumed());
}
