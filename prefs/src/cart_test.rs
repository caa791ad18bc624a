use super::*;

// --- Item keys and parsing ---

#[test]
fn item_keys_are_fixed() {
    assert_eq!(Item::Paperclip.key(), "paperclip");
    assert_eq!(Item::Monalisa.key(), "monalisa");
    assert_eq!(Item::Spaceshuttle.key(), "spaceshuttle");
}

#[test]
fn items_const_covers_all_keys() {
    let keys: Vec<&str> = ITEMS.iter().map(|i| i.key()).collect();
    assert_eq!(keys, vec!["paperclip", "monalisa", "spaceshuttle"]);
}

#[test]
fn item_from_str_round_trip() {
    for item in ITEMS {
        assert_eq!(item.key().parse::<Item>().unwrap(), item);
    }
}

#[test]
fn item_from_str_case_insensitive() {
    assert_eq!("Paperclip".parse::<Item>().unwrap(), Item::Paperclip);
    assert_eq!("MONALISA".parse::<Item>().unwrap(), Item::Monalisa);
}

#[test]
fn item_from_str_rejects_unknown() {
    let err = "computer".parse::<Item>().unwrap_err();
    assert!(err.to_string().contains("computer"));
}

// --- Counts ---

#[test]
fn new_cart_is_empty() {
    let cart = Cart::new();
    for item in ITEMS {
        assert_eq!(cart.count(item), 0);
    }
    assert_eq!(cart.total(), 0);
}

#[test]
fn add_one_increments() {
    let mut cart = Cart::new();
    cart.add_one(Item::Paperclip);
    cart.add_one(Item::Paperclip);
    cart.add_one(Item::Monalisa);
    assert_eq!(cart.count(Item::Paperclip), 2);
    assert_eq!(cart.count(Item::Monalisa), 1);
    assert_eq!(cart.count(Item::Spaceshuttle), 0);
    assert_eq!(cart.total(), 3);
}

#[test]
fn remove_one_decrements() {
    let mut cart = Cart::new();
    cart.set_count(Item::Spaceshuttle, 2);
    cart.remove_one(Item::Spaceshuttle);
    assert_eq!(cart.count(Item::Spaceshuttle), 1);
}

#[test]
fn remove_one_at_zero_stays_zero() {
    let mut cart = Cart::new();
    cart.remove_one(Item::Paperclip);
    assert_eq!(cart.count(Item::Paperclip), 0);
}

#[test]
fn remove_one_repeated_never_goes_negative() {
    let mut cart = Cart::new();
    cart.set_count(Item::Monalisa, 1);
    for _ in 0..5 {
        cart.remove_one(Item::Monalisa);
    }
    assert_eq!(cart.count(Item::Monalisa), 0);
}

// --- Clamping ---

#[test]
fn set_count_clamps_negative_to_zero() {
    let mut cart = Cart::new();
    cart.set_count(Item::Paperclip, -7);
    assert_eq!(cart.count(Item::Paperclip), 0);
}

#[test]
fn set_count_accepts_in_range() {
    let mut cart = Cart::new();
    cart.set_count(Item::Paperclip, 42);
    assert_eq!(cart.count(Item::Paperclip), 42);
}

#[test]
fn clamp_count_bounds() {
    assert_eq!(Cart::clamp_count(-1), 0);
    assert_eq!(Cart::clamp_count(0), 0);
    assert_eq!(Cart::clamp_count(i64::MAX), u32::MAX);
}
