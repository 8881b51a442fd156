use super::*;

pub fn raw_item(id: i64, price_m: u32) -> RawItem {
    RawItem {
        id,
        item_type: "toy".to_string(),
        name: format!("item-{id}"),
        description: format!("description of item-{id}"),
        price_m,
        price_l: price_m + 500,
        image_path: format!("img/{id}.png"),
        deleted: false,
    }
}

pub fn payload(prices: &[(i64, u32)]) -> CatalogPayload {
    CatalogPayload {
        items: prices.iter().map(|(id, p)| raw_item(*id, *p)).collect(),
    }
}

pub fn order_item(id: i64, size: &str) -> OrderItem {
    OrderItem {
        id,
        item_id: id * 10,
        order_id: 1,
        quantity: 2,
        size: size.to_string(),
        item: Item {
            topping_list: vec![Topping {
                id: 5,
                topping_type: "sticker".to_string(),
                name: "Star".to_string(),
                price_m: 200,
                price_l: 300,
            }],
            ..Item::from(raw_item(id * 10, 1000))
        },
        order_topping_list: vec![OrderTopping {
            id: id * 100,
            topping_id: 5,
            order_item_id: id,
            topping: Topping {
                id: 5,
                topping_type: "sticker".to_string(),
                name: "Star".to_string(),
                price_m: 200,
                price_l: 300,
            },
        }],
    }
}
