mod common;

use heliostore::backend::{RawPrice, RawProductRecord};
use heliostore::catalog::normalize::normalize;

use common::PLACEHOLDER;

#[test]
fn test_complete_row_passes_through() {
    let raw = common::raw("p1", "Inverter", 129_900);
    let product = normalize(&raw, PLACEHOLDER);

    assert_eq!(product.id, "p1");
    assert_eq!(product.name, "Inverter");
    assert_eq!(product.price_minor, 129_900);
    assert_eq!(product.image_url, "https://assets.test/p1.jpg");
}

#[test]
fn test_title_fallback_for_name() {
    let raw = RawProductRecord {
        id: "p1".to_string(),
        title: Some("Legacy Panel".to_string()),
        ..Default::default()
    };
    assert_eq!(normalize(&raw, PLACEHOLDER).name, "Legacy Panel");
}

#[test]
fn test_name_wins_over_title() {
    let raw = RawProductRecord {
        id: "p1".to_string(),
        name: Some("Panel".to_string()),
        title: Some("Legacy Panel".to_string()),
        ..Default::default()
    };
    assert_eq!(normalize(&raw, PLACEHOLDER).name, "Panel");
}

#[test]
fn test_untitled_when_both_names_missing() {
    let raw = RawProductRecord {
        id: "p1".to_string(),
        ..Default::default()
    };
    assert_eq!(normalize(&raw, PLACEHOLDER).name, "Untitled");
}

#[test]
fn test_empty_name_is_kept_not_replaced() {
    // Absence falls through the chain, an empty string does not.
    let raw = RawProductRecord {
        id: "p1".to_string(),
        name: Some(String::new()),
        title: Some("Legacy Panel".to_string()),
        ..Default::default()
    };
    assert_eq!(normalize(&raw, PLACEHOLDER).name, "");
}

#[test]
fn test_missing_price_is_zero() {
    let raw = RawProductRecord {
        id: "p1".to_string(),
        ..Default::default()
    };
    assert_eq!(normalize(&raw, PLACEHOLDER).price_minor, 0);
}

#[test]
fn test_price_coercion_shapes() {
    let cases = [
        (RawPrice::Int(4_500), 4_500),
        (RawPrice::Float(4_500.9), 4_500),
        (RawPrice::Text("4500".to_string()), 4_500),
        (RawPrice::Text(" 4500.5 ".to_string()), 4_500),
        (RawPrice::Text("not a price".to_string()), 0),
        (RawPrice::Int(-200), 0),
    ];

    for (price, expected) in cases {
        let raw = RawProductRecord {
            id: "p1".to_string(),
            price_cents: Some(price),
            ..Default::default()
        };
        assert_eq!(normalize(&raw, PLACEHOLDER).price_minor, expected);
    }
}

#[test]
fn test_missing_image_gets_placeholder() {
    let raw = RawProductRecord {
        id: "p1".to_string(),
        ..Default::default()
    };
    assert_eq!(normalize(&raw, PLACEHOLDER).image_url, PLACEHOLDER);
}

#[test]
fn test_missing_descriptions_become_empty() {
    let raw = RawProductRecord {
        id: "p1".to_string(),
        ..Default::default()
    };
    let product = normalize(&raw, PLACEHOLDER);
    assert_eq!(product.short_description, "");
    assert_eq!(product.full_description, "");
}

#[test]
fn test_wire_rows_decode_with_mixed_price_shapes() {
    // Legacy rows carry prices as strings or floats; newer ones as
    // integers. All three decode through the untagged wire enum.
    let body = r#"[
        {"id": "p1", "name": "Panel", "price_cents": 4500},
        {"id": "p2", "title": "Old Panel", "price_cents": "4500"},
        {"id": "p3", "price_cents": 4500.5}
    ]"#;

    let rows: Vec<RawProductRecord> = serde_json::from_str(body).unwrap();
    let prices: Vec<i64> = rows
        .iter()
        .map(|raw| normalize(raw, PLACEHOLDER).price_minor)
        .collect();
    assert_eq!(prices, vec![4_500, 4_500, 4_500]);
    assert_eq!(normalize(&rows[1], PLACEHOLDER).name, "Old Panel");
}

#[test]
fn test_bullet_lines_skip_blanks() {
    let mut product = common::product("p1", "Panel", 100);
    product.full_description = "400W output\n\n  25 year warranty  \n\n".to_string();

    let lines: Vec<&str> = product.bullet_lines().collect();
    assert_eq!(lines, vec!["400W output", "25 year warranty"]);
}
