use super::*;
use crate::cart::Item;

/// Key set of a JSON object, sorted: the contract is "all and only the
/// fixed keys", not any particular map order.
fn json_keys(value: &serde_json::Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

// --- CartSync ---

#[test]
fn cart_sync_serializes_exactly_the_fixed_keys() {
    let payload = CartSync::from(Cart::new());
    let value = serde_json::to_value(payload).unwrap();
    assert_eq!(json_keys(&value), vec!["monalisa", "paperclip", "spaceshuttle"]);
}

#[test]
fn cart_sync_wire_format_is_stable() {
    // The streamed wire shape keeps struct declaration order.
    let json = serde_json::to_string(&CartSync::from(Cart::new())).unwrap();
    assert_eq!(json, r#"{"paperclip":0,"monalisa":0,"spaceshuttle":0}"#);
}

#[test]
fn cart_sync_keys_do_not_depend_on_mutation() {
    let mut cart = Cart::new();
    cart.add_one(Item::Monalisa);
    let value = serde_json::to_value(CartSync::from(cart)).unwrap();
    assert_eq!(json_keys(&value), vec!["monalisa", "paperclip", "spaceshuttle"]);
    assert_eq!(value["monalisa"], 1);
    assert_eq!(value["paperclip"], 0);
}

#[test]
fn cart_sync_never_serializes_negative_counts() {
    let mut cart = Cart::new();
    cart.remove_one(Item::Paperclip);
    let value = serde_json::to_value(CartSync::from(cart)).unwrap();
    assert_eq!(value["paperclip"], 0);
}

#[test]
fn cart_sync_deserializes_server_echo() {
    let payload: CartSync = serde_json::from_str(r#"{"paperclip":1,"monalisa":2,"spaceshuttle":3}"#).unwrap();
    assert_eq!(payload, CartSync { paperclip: 1, monalisa: 2, spaceshuttle: 3 });
}

// --- ColorSync ---

#[test]
fn color_sync_serializes_exactly_the_fixed_keys() {
    let value = serde_json::to_value(ColorSync::from(Rgb::default())).unwrap();
    assert_eq!(json_keys(&value), vec!["blue", "green", "red"]);
    assert_eq!(value["red"], 128);
}

#[test]
fn color_sync_wire_format_is_stable() {
    let json = serde_json::to_string(&ColorSync::from(Rgb::default())).unwrap();
    assert_eq!(json, r#"{"red":128,"green":128,"blue":128}"#);
}

#[test]
fn color_sync_carries_channel_values() {
    let value = serde_json::to_value(ColorSync::from(Rgb::new(26, 43, 60))).unwrap();
    assert_eq!(value["red"], 26);
    assert_eq!(value["green"], 43);
    assert_eq!(value["blue"], 60);
}
