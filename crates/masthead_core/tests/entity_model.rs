use masthead_core::{Article, Author, Magazine};
use uuid::Uuid;

#[test]
fn author_name_is_one_time() {
    let mut author = Author::new("Ama");
    assert_eq!(author.name(), Some("Ama"));

    assert!(!author.set_name("Someone Else"));
    assert_eq!(author.name(), Some("Ama"));
}

#[test]
fn rejected_author_name_leaves_slot_open() {
    let mut author = Author::new("");
    assert_eq!(author.name(), None);

    assert!(author.set_name("Zoe"));
    assert_eq!(author.name(), Some("Zoe"));
}

#[test]
fn magazine_name_respects_length_bounds() {
    let mut magazine = Magazine::new("A", "Tech");
    assert_eq!(magazine.name(), None);
    assert_eq!(magazine.category(), Some("Tech"));

    assert!(magazine.set_name("Ab"));
    assert_eq!(magazine.name(), Some("Ab"));

    assert!(magazine.set_name("SixteenCharsLong"));
    assert_eq!(magazine.name(), Some("SixteenCharsLong"));

    assert!(!magazine.set_name("SeventeenCharsXYZ"));
    assert_eq!(magazine.name(), Some("SixteenCharsLong"));
}

#[test]
fn magazine_name_bounds_count_characters_not_bytes() {
    let mut magazine = Magazine::new("Vogue", "Fashion");
    assert!(magazine.set_name("Tëch Wörld"));
    assert_eq!(magazine.name(), Some("Tëch Wörld"));
}

#[test]
fn magazine_category_rejects_empty_but_stays_mutable() {
    let mut magazine = Magazine::new("Tech Weekly", "");
    assert_eq!(magazine.category(), None);

    assert!(magazine.set_category("Tech"));
    assert!(magazine.set_category("Science"));
    assert_eq!(magazine.category(), Some("Science"));

    assert!(!magazine.set_category(""));
    assert_eq!(magazine.category(), Some("Science"));
}

#[test]
fn article_title_is_one_time_and_bounded() {
    let mut article = Article::new("Hi");
    assert_eq!(article.title(), None);

    assert!(article.set_title("Rust for Editors"));
    assert_eq!(article.title(), Some("Rust for Editors"));

    assert!(!article.set_title("A Perfectly Fine Replacement"));
    assert_eq!(article.title(), Some("Rust for Editors"));
}

#[test]
fn article_title_rejects_over_fifty_characters() {
    let long_title = "x".repeat(51);
    let article = Article::new(&long_title);
    assert_eq!(article.title(), None);

    let max_title = "x".repeat(50);
    let article = Article::new(&max_title);
    assert_eq!(article.title(), Some(max_title.as_str()));
}

#[test]
fn author_serialization_uses_expected_wire_fields() {
    let author_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let author = Author::with_id(author_id, "Ama");

    let json = serde_json::to_value(&author).unwrap();
    assert_eq!(json["uuid"], author_id.to_string());
    assert_eq!(json["name"], "Ama");

    let decoded: Author = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, author);
}

#[test]
fn unset_slots_serialize_as_null() {
    let magazine = Magazine::new("X", "");
    let json = serde_json::to_value(&magazine).unwrap();
    assert!(json["name"].is_null());
    assert!(json["category"].is_null());

    let article = Article::new("tiny");
    let json = serde_json::to_value(&article).unwrap();
    assert!(json["title"].is_null());
    assert!(json["author"].is_null());
    assert!(json["magazine"].is_null());

    let decoded: Article = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, article);
}
