// tests/menu_parser.rs
//
// End-to-end parser behavior over realistic dish strings.

use neis_meal::data::DishEntry;
use neis_meal::menu::{MenuParser, parse_menu};

fn entry(name: &str, allergy: &str) -> DishEntry {
    DishEntry { name: name.into(), allergy: allergy.into() }
}

#[test]
fn empty_input_yields_no_entries() {
    assert!(parse_menu("").is_empty());
}

#[test]
fn splits_on_line_delimiter_in_order() {
    assert_eq!(
        parse_menu("밥<br/>김치찌개(9.13)"),
        vec![entry("밥", ""), entry("김치찌개", "9.13")]
    );
}

#[test]
fn strips_marker_prefix_and_hyphen_note() {
    assert_eq!(parse_menu("*조 토스트-딸기잼(5)"), vec![entry("토스트", "5")]);
}

#[test]
fn category_only_entry_is_dropped() {
    assert!(parse_menu("(밥)").is_empty());
    // the dropped entry leaves no hole in the sequence
    assert_eq!(
        parse_menu("밥<br/>(밥)<br/>미역국"),
        vec![entry("밥", ""), entry("미역국", "")]
    );
}

#[test]
fn category_tags_removed_anywhere() {
    assert_eq!(
        parse_menu("미역국(국) 쇠고기(볶음)무침"),
        vec![entry("미역국 쇠고기무침", "")]
    );
}

#[test]
fn malformed_allergy_group_is_plain_text() {
    assert_eq!(parse_menu("김치찌개(9.x)"), vec![entry("김치찌개(9.x)", "")]);
    assert_eq!(parse_menu("김치찌개(9,13)"), vec![entry("김치찌개(9,13)", "")]);
}

#[test]
fn duplicates_preserved_in_order() {
    assert_eq!(parse_menu("밥<br/>밥"), vec![entry("밥", ""), entry("밥", "")]);
}

#[test]
fn idempotent_over_same_input() {
    let input = "찹쌀밥<br/>대구매운탕(5.6.9.13.18)<br/>*석 김말이튀김(1.5.6)";
    assert_eq!(parse_menu(input), parse_menu(input));
}

#[test]
fn allergy_round_trip() {
    for name in ["토스트", "김치찌개", "pasta bake"] {
        let input = format!("{name}(3.18)");
        assert_eq!(parse_menu(&input), vec![entry(name, "3.18")]);
    }
}

#[test]
fn full_day_sample() {
    let input = "찹쌀밥<br/>대구매운탕(5.6.9.13.18)<br/>계란찜(1)<br/>배추김치(9.13)<br/>멜론";
    let got = parse_menu(input);
    assert_eq!(
        got,
        vec![
            entry("찹쌀밥", ""),
            entry("대구매운탕", "5.6.9.13.18"),
            entry("계란찜", "1"),
            entry("배추김치", "9.13"),
            entry("멜론", ""),
        ]
    );
}

#[test]
fn custom_category_vocabulary() {
    let parser = MenuParser::with_categories(&["김치"]);
    assert_eq!(parser.parse("깍두기(김치)"), vec![entry("깍두기", "")]);

    // the default vocabulary leaves unknown tags in place
    assert_eq!(parse_menu("깍두기(김치)"), vec![entry("깍두기(김치)", "")]);
}
