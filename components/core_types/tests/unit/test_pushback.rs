//! Unit tests for the single-slot Pushback buffer

use core_types::Pushback;

#[test]
fn test_pushback_round_trip() {
    let mut slot = Pushback::new();
    assert!(slot.is_empty());

    slot.push(String::from("token"));
    assert_eq!(slot.peek().map(String::as_str), Some("token"));
    assert_eq!(slot.take().as_deref(), Some("token"));
    assert!(slot.is_empty());
}

#[test]
fn test_pushback_take_on_empty() {
    let mut slot: Pushback<char> = Pushback::default();
    assert_eq!(slot.take(), None);
}

#[test]
#[should_panic]
fn test_pushback_rejects_second_item() {
    let mut slot = Pushback::new();
    slot.push('x');
    slot.push('y');
}
