// src/menu.rs
//
// Dish-string parser for the DDISH_NM field.
//
// A raw field is a list of dishes joined by "<br/>". Each entry may end
// with a parenthesized allergen list "(1.5.13)", may carry a free-text
// "-note" suffix, category tags like "(밥)" anywhere in the name, and a
// meal marker ("조"/"중"/"석", optionally starred) on either end.
// Cleanup stages run in a fixed order; each works on the output of the
// previous one.

use std::sync::LazyLock;

use regex::Regex;

use crate::data::DishEntry;

/// Delimiter the data source puts between dish entries.
pub const LINE_DELIM: &str = "<br/>";

/// Category tags the source appends to classify a dish. No allergen
/// meaning. Not exhaustive; extend via [`MenuParser::with_categories`]
/// when a school's menus use tags outside this set.
pub const CATEGORY_TAGS: &[&str] = &[
    "조", "밥", "국", "소스", "후식", "샐러드", "무침", "볶음", "구이", "찜",
    "튀김", "볶음밥", "스프", "치즈", "드레싱", "라이스", "스튜", "볼", "탕",
    "장", "면", "스테이크", "그라탕", "롤", "죽", "반찬", "디저트", "식", "음료",
];

// Trailing "(1.5.13)" allergen group. Anything non-digit/dot inside the
// parentheses is ordinary text and stays in the name.
static ALLERGY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+(?:\.\d+)*)\)$").unwrap());

// "조"/"중"/"석" meal markers, optionally starred, on either end.
static LEAD_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*?[조중석]\s*").unwrap());
static TAIL_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\*?[조중석]$").unwrap());

static DEFAULT_PARSER: LazyLock<MenuParser> = LazyLock::new(MenuParser::new);

/// Parse a raw dish string with the default category vocabulary.
pub fn parse_menu(dish_text: &str) -> Vec<DishEntry> {
    DEFAULT_PARSER.parse(dish_text)
}

pub struct MenuParser {
    category_re: Regex,
}

impl MenuParser {
    pub fn new() -> Self {
        Self::with_categories(CATEGORY_TAGS)
    }

    /// Build a parser with a custom category vocabulary.
    pub fn with_categories(tags: &[&str]) -> Self {
        let alts: Vec<String> = tags.iter().map(|t| regex::escape(t)).collect();
        let pattern = format!(r"\(({})\)", alts.join("|"));
        Self {
            // escaped alternation, always compiles
            category_re: Regex::new(&pattern).unwrap(),
        }
    }

    /// Split and clean every entry, preserving source order. Entries whose
    /// name is empty after cleanup are dropped.
    pub fn parse(&self, dish_text: &str) -> Vec<DishEntry> {
        dish_text
            .split(LINE_DELIM)
            .filter_map(|raw| self.parse_entry(raw))
            .collect()
    }

    fn parse_entry(&self, raw: &str) -> Option<DishEntry> {
        // 1. Trailing allergen group, if any.
        let (body, allergy) = match ALLERGY_RE.captures(raw) {
            Some(caps) => match (caps.get(0), caps.get(1)) {
                (Some(whole), Some(codes)) => (&raw[..whole.start()], s!(codes.as_str())),
                _ => (raw, s!()),
            },
            None => (raw, s!()),
        };

        // 2. Drop any "-note" suffix.
        let body = match body.find('-') {
            Some(i) => &body[..i],
            None => body,
        };

        // 3. Category tags can sit anywhere, not just at the end.
        let body = self.category_re.replace_all(body, "");
        let body = body.trim();

        // 4. Meal markers on either end.
        let body = LEAD_MARKER_RE.replace(body, "");
        let name = TAIL_MARKER_RE.replace(&body, "");

        (!name.is_empty()).then(|| DishEntry { name: name.into_owned(), allergy })
    }
}

impl Default for MenuParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DishEntry;

    #[test]
    fn allergy_suffix_is_split_off() {
        assert_eq!(parse_menu("김치찌개(9.13)")[0].allergy, "9.13");
        assert_eq!(parse_menu("밥")[0].allergy, "");
    }

    #[test]
    fn hyphen_note_discarded_with_leading_spaces() {
        let got = parse_menu("토스트 -딸기잼");
        assert_eq!(got[0].name, "토스트");
    }

    #[test]
    fn starred_trailing_marker() {
        assert_eq!(parse_menu("김말이튀김*석")[0].name, "김말이튀김");
        assert_eq!(parse_menu("김말이튀김 *석")[0].name, "김말이튀김");
    }

    #[test]
    fn entry_reduced_to_nothing_is_dropped() {
        assert!(parse_menu("(후식)").is_empty());
        assert!(parse_menu("*조").is_empty());
        assert!(parse_menu("").is_empty());
    }

    #[test]
    fn allergy_captured_before_note_truncation() {
        // the allergen list sits inside the note; it still gets captured
        let got = parse_menu("토스트-딸기잼(5.6)");
        assert_eq!(got, vec![DishEntry { name: s!("토스트"), allergy: s!("5.6") }]);
    }
}
