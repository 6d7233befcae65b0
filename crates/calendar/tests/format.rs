use maya_calendar::{CalendarError, MayanDate, parse, render, try_parse};

fn date(b: i32, k: i32, t: i32, w: i32, i: i32) -> MayanDate {
    MayanDate::new(b, k, t, w, i).unwrap()
}

#[test]
fn parse_digits() {
    let d = parse("1.2.3.4.5").unwrap();
    let lc = d.long_count();
    assert_eq!(lc.baktun(), 1);
    assert_eq!(lc.katun(), 2);
    assert_eq!(lc.tun(), 3);
    assert_eq!(lc.winal(), 4);
    assert_eq!(lc.kin(), 5);
}

#[test]
fn parse_with_cyclical_suffix() {
    let d = parse("1.2.3.4.5 4 Ajaw 8 Kumk'u").unwrap();
    assert_eq!(d.long_count().digits(), [1, 2, 3, 4, 5]);
}

#[test]
fn malformed_and_out_of_range_are_distinct() {
    assert!(matches!(parse("4 Ajaw"), Err(CalendarError::Format { .. })));
    assert!(matches!(parse("1.2.3.4."), Err(CalendarError::Format { .. })));
    assert!(matches!(
        parse("19.19.19.19.19"),
        Err(CalendarError::OutOfRange { .. })
    ));
}

#[test]
fn try_parse_never_errors() {
    assert_eq!(try_parse("9.8.9.13.0"), Some(date(9, 8, 9, 13, 0)));
    assert_eq!(try_parse(""), None);
    assert_eq!(try_parse("0.0.0.18.0"), None);
}

#[test]
fn display_roundtrips_every_tun() {
    let mut d = MayanDate::MIN;
    while let Ok(next) = d.add_days(360) {
        assert_eq!(parse(&d.to_string()).unwrap(), d);
        d = next;
    }
}

#[test]
fn render_empty_template() {
    assert_eq!(render(date(1, 2, 3, 4, 5), ""), "");
}

#[test]
fn render_every_directive_escaped() {
    let template = "%% %%c %%L %%b %%k %%u %%w %%i %%t %%T %%D %%h %%H %%M";
    assert_eq!(
        render(date(9, 8, 9, 13, 0), template),
        "% %c %L %b %k %u %w %i %t %T %D %h %H %M"
    );
}

#[test]
fn render_every_directive() {
    let d = date(9, 9, 2, 4, 8);
    let out = render(d, "%c|%L|%b|%k|%u|%w|%i|%t|%T|%D|%h|%H|%M");
    assert_eq!(out, "1361608|9.9.2.4.8|9|9|2|4|8|5|8|Lamat|1|8|Mol");
}

#[test]
fn render_long_count_and_days() {
    assert_eq!(render(date(1, 2, 3, 4, 5), "%L"), "1.2.3.4.5");
    assert_eq!(render(date(0, 0, 0, 1, 1), "%c"), "21");
}

#[test]
fn render_default_layout() {
    let d = date(10, 2, 9, 1, 9);
    assert_eq!(render(d, "%L, %t %D %h %M"), d.to_string());
}

#[test]
fn render_unknown_directive_emits_nothing() {
    assert_eq!(render(date(1, 2, 3, 4, 5), "[%x]"), "[]");
}

#[test]
fn render_trailing_percent() {
    assert_eq!(render(date(1, 2, 3, 4, 5), "50%"), "50%");
}
