use super::*;

#[test]
fn codes_round_trip() {
    for lang in [Lang::En, Lang::Vi] {
        assert_eq!(Lang::from_code(lang.code()), lang);
    }
}

#[test]
fn unknown_code_falls_back_to_english() {
    assert_eq!(Lang::from_code("fr"), Lang::En);
    assert_eq!(Lang::from_code(""), Lang::En);
}

#[test]
fn tables_differ_per_language() {
    assert_ne!(EN.login_submit, VI.login_submit);
    assert_ne!(EN.nav_categories, VI.nav_categories);
}

#[test]
fn labels_use_native_spelling() {
    assert_eq!(Lang::En.label(), "English");
    assert_eq!(Lang::Vi.label(), "Tiếng Việt");
}
