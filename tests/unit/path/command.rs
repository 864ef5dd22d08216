use super::*;
use crate::foundation::error::BrushError;

#[test]
fn parses_move_line_sequences() {
    let p = Path::parse("M10,20L30,40L50,60").unwrap();
    assert_eq!(
        p.commands(),
        &[
            PathCommand::MoveTo(Point::new(10.0, 20.0)),
            PathCommand::LineTo(Point::new(30.0, 40.0)),
            PathCommand::LineTo(Point::new(50.0, 60.0)),
        ]
    );
}

#[test]
fn parses_curves_and_close() {
    let p = Path::parse("M0,0C1,2 3,4 5,6Q7,8 9,10Z").unwrap();
    assert_eq!(p.len(), 4);
    assert_eq!(
        p.commands()[1],
        PathCommand::CubicTo {
            ctrl1: Point::new(1.0, 2.0),
            ctrl2: Point::new(3.0, 4.0),
            to: Point::new(5.0, 6.0),
        }
    );
    assert_eq!(p.commands()[3], PathCommand::Close);
}

#[test]
fn accepts_whitespace_and_comma_separators() {
    let a = Path::parse("M 10 20 L 30 40").unwrap();
    let b = Path::parse("M10,20L30,40").unwrap();
    assert_eq!(a, b);
}

#[test]
fn implicit_repetition_after_moveto_is_lineto() {
    let p = Path::parse("M0,0 10,10 20,5").unwrap();
    assert_eq!(p.len(), 3);
    assert_eq!(p.commands()[2], PathCommand::LineTo(Point::new(20.0, 5.0)));
}

#[test]
fn horizontal_and_vertical_normalize_to_lineto() {
    let p = Path::parse("M5,5H20V30").unwrap();
    assert_eq!(
        p.commands(),
        &[
            PathCommand::MoveTo(Point::new(5.0, 5.0)),
            PathCommand::LineTo(Point::new(20.0, 5.0)),
            PathCommand::LineTo(Point::new(20.0, 30.0)),
        ]
    );
}

#[test]
fn parses_negative_and_exponent_numbers() {
    let p = Path::parse("M-10.5,2e2L3.25,-4").unwrap();
    assert_eq!(p.commands()[0], PathCommand::MoveTo(Point::new(-10.5, 200.0)));
    assert_eq!(p.commands()[1], PathCommand::LineTo(Point::new(3.25, -4.0)));
}

#[test]
fn rejects_relative_and_unknown_commands() {
    assert!(matches!(
        Path::parse("M0,0l10,10"),
        Err(BrushError::UnsupportedCommand(_))
    ));
    assert!(matches!(
        Path::parse("M0,0A5,5 0 0 1 10,10"),
        Err(BrushError::UnsupportedCommand(_))
    ));
}

#[test]
fn rejects_malformed_input_without_partial_path() {
    assert!(matches!(Path::parse("M10"), Err(BrushError::Parse(_))));
    assert!(matches!(Path::parse("L10,20"), Err(BrushError::Parse(_))));
    assert!(matches!(Path::parse("10,20"), Err(BrushError::Parse(_))));
    assert!(matches!(Path::parse("M1,2C3,4"), Err(BrushError::Parse(_))));
}

#[test]
fn rejects_leading_close_like_any_other_command() {
    assert!(matches!(Path::parse("Z"), Err(BrushError::Parse(_))));
    assert!(matches!(Path::parse("ZM0,0L1,1"), Err(BrushError::Parse(_))));
    // A close after a moveto is still fine.
    assert!(Path::parse("M0,0L1,1Z").is_ok());
}

#[test]
fn serializes_with_letter_and_comma_joined_params() {
    let d = "M10,20L30,40C1,2,3,4,5,6Q7,8,9,10Z";
    assert_eq!(Path::parse(d).unwrap().to_string(), d);
}

#[test]
fn serializer_prints_integral_floats_without_decimals() {
    let p = Path::from_commands(vec![
        PathCommand::MoveTo(Point::new(10.0, 20.5)),
        PathCommand::LineTo(Point::new(-3.0, 0.25)),
    ]);
    assert_eq!(p.to_string(), "M10,20.5L-3,0.25");
}

#[test]
fn parse_display_roundtrip_is_stable() {
    let d = "M112,262L112,155.5L196,155.5L196,49";
    let once = Path::parse(d).unwrap().to_string();
    assert_eq!(once, d);
    assert_eq!(Path::parse(&once).unwrap().to_string(), once);
}
