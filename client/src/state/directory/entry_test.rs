use super::*;

#[test]
fn category_parse_accepts_every_known_tag() {
    for cat in Category::ALL {
        assert_eq!(Category::parse(cat.as_str()), Some(cat));
    }
}

#[test]
fn category_parse_is_case_sensitive() {
    assert_eq!(Category::parse("Crisis"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn category_from_str_reports_validation_error() {
    assert_eq!("pets".parse::<Category>(), Err(ValidationError::UnknownCategory("pets".to_owned())));
    assert_eq!("youth".parse::<Category>(), Ok(Category::Youth));
}

#[test]
fn default_and_priority_categories() {
    assert_eq!(Category::DEFAULT, Category::General);
    assert_eq!(Category::PRIORITY, Category::Crisis);
}

#[test]
fn default_descriptors_cover_every_category_once() {
    let cats: Vec<_> = DEFAULT_CATEGORIES.iter().map(|d| d.category).collect();
    assert_eq!(cats, Category::ALL.to_vec());
    assert_eq!(DEFAULT_CATEGORIES[0].fallback_name, "Crisis Lines");
}

#[test]
fn unknown_tag_resolves_to_default() {
    assert_eq!(Entry::new("a", "mystery").resolved_category(), Category::General);
    assert_eq!(Entry::new("b", "veterans").resolved_category(), Category::Veterans);
}

#[test]
fn entry_fields_are_looked_up_by_name() {
    let e = Entry::new("988", "crisis").with_field("phone", "988");
    assert_eq!(e.field("phone"), Some("988"));
    assert_eq!(e.field("email"), None);
}

#[test]
fn category_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Category::Lgbtq).unwrap(), "\"lgbtq\"");
}
