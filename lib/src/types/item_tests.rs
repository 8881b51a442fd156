use crate::types::{SIZE_L, SIZE_M};

use super::*;

#[test]
fn decodes_api_item_with_upstream_member_names() {
    let json = r#"{
        "id": 7,
        "type": "toy",
        "name": "Robot",
        "discription": "walks and talks",
        "priceM": 1200,
        "priceL": 1800,
        "imagePath": "img/robot.png",
        "deleted": false
    }"#;

    let raw: RawItem = serde_json::from_str(json).unwrap();

    assert_eq!(raw.id, 7);
    assert_eq!(raw.item_type, "toy");
    assert_eq!(raw.name, "Robot");
    assert_eq!(raw.description, "walks and talks");
    assert_eq!(raw.price_m, 1200);
    assert_eq!(raw.price_l, 1800);
    assert_eq!(raw.image_path, "img/robot.png");
    assert!(!raw.deleted);
}

#[test]
fn correctly_spelled_description_is_not_read() {
    let json = r#"{"id": 1, "description": "spelled right"}"#;
    let raw: RawItem = serde_json::from_str(json).unwrap();
    assert_eq!(raw.description, "");
}

#[test]
fn missing_members_fall_back_to_defaults() {
    let raw: RawItem = serde_json::from_str(r#"{"name": "Yo-yo"}"#).unwrap();
    assert_eq!(raw.name, "Yo-yo");
    assert_eq!(raw.id, 0);
    assert_eq!(raw.price_m, 0);
    assert!(raw.image_path.is_empty());

    let payload: CatalogPayload = serde_json::from_str("{}").unwrap();
    assert!(payload.items.is_empty());
}

#[test]
fn item_from_raw_copies_fields_and_drops_toppings() {
    let raw = RawItem {
        id: 3,
        item_type: "toy".to_string(),
        name: "Kite".to_string(),
        description: "flies".to_string(),
        price_m: 300,
        price_l: 450,
        image_path: "img/kite.png".to_string(),
        deleted: true,
    };

    let item = Item::from(raw);

    assert_eq!(item.id, 3);
    assert_eq!(item.item_type, "toy");
    assert_eq!(item.name, "Kite");
    assert_eq!(item.description, "flies");
    assert_eq!(item.price_m, 300);
    assert_eq!(item.price_l, 450);
    assert_eq!(item.image_path, "img/kite.png");
    assert!(item.deleted);
    assert!(item.topping_list.is_empty());
}

#[test]
fn price_for_size() {
    let item = Item {
        price_m: 100,
        price_l: 150,
        ..Item::default()
    };
    assert_eq!(item.price_for(SIZE_M), 100);
    assert_eq!(item.price_for(SIZE_L), 150);
    assert_eq!(item.price_for("XL"), 100);
}
