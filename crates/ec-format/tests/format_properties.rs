use ec_format::{format_number, format_percent, parse_locale_number};
use proptest::prelude::*;

#[test]
fn report_cells() {
    assert_eq!(format_number("1234.5"), "1.234,50");
    assert_eq!(format_number(None::<f64>), "-");
    assert_eq!(format_number("abc"), "abc");
    assert_eq!(format_percent("3.8%"), "3,80%");
}

proptest! {
    #[test]
    fn formatted_numbers_parse_back(x in -1.0e9_f64..1.0e9_f64) {
        let shown = format_number(x);
        let parsed = parse_locale_number(&shown).expect("formatted output parses");
        prop_assert!((parsed - x).abs() <= 0.01);
    }

    #[test]
    fn formatting_twice_is_a_no_op(x in -1.0e9_f64..1.0e9_f64) {
        let once = format_number(x);
        let twice = format_number(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn percent_formatting_twice_is_a_no_op(x in -1.0e6_f64..1.0e6_f64) {
        let once = format_percent(x);
        let twice = format_percent(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn formatter_never_panics_on_text(s in "\\PC*") {
        let _ = format_number(s.as_str());
        let _ = format_percent(s.as_str());
    }
}
