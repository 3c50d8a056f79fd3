// Host-side tests for keyboard mapping and the animation clock.

use physics_lab::core::clock::AnimationClock;
use physics_lab::core::input::{is_text_entry, key_action, KeyAction};

#[test]
fn navigation_keys() {
    assert_eq!(key_action("ArrowRight"), Some(KeyAction::Next));
    assert_eq!(key_action("]"), Some(KeyAction::Next));
    assert_eq!(key_action("ArrowLeft"), Some(KeyAction::Previous));
    assert_eq!(key_action("["), Some(KeyAction::Previous));
}

#[test]
fn letter_keys_ignore_case() {
    for (lower, upper, action) in [
        ("r", "R", KeyAction::Reroll),
        ("m", "M", KeyAction::ToggleAudio),
        ("x", "X", KeyAction::Random),
        ("t", "T", KeyAction::ToggleTextbook),
    ] {
        assert_eq!(key_action(lower), Some(action));
        assert_eq!(key_action(upper), Some(action));
    }
    assert_eq!(key_action("Escape"), Some(KeyAction::CloseModal));
}

#[test]
fn unmapped_keys() {
    for key in ["", "a", "ArrowUp", " ", "Enter", "escape"] {
        assert_eq!(key_action(key), None, "{:?}", key);
    }
}

#[test]
fn form_fields_swallow_shortcuts() {
    assert!(is_text_entry("INPUT"));
    assert!(is_text_entry("textarea"));
    assert!(is_text_entry("Select"));
    assert!(!is_text_entry("BUTTON"));
    assert!(!is_text_entry("CANVAS"));
}

#[test]
fn clock_is_monotonic() {
    let mut clock = AnimationClock::new();
    assert_eq!(clock.seconds(), 0.0);
    clock.advance(250.0);
    assert_eq!(clock.millis(), 250.0);
    clock.advance(100.0);
    assert_eq!(clock.millis(), 250.0);
    clock.advance(f64::INFINITY);
    clock.advance(f64::NAN);
    assert_eq!(clock.millis(), 250.0);
    clock.advance(2_000.0);
    assert_eq!(clock.seconds(), 2.0);
}
