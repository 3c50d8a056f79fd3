/// Global keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Previous,
    Reroll,
    ToggleAudio,
    Random,
    ToggleTextbook,
    CloseModal,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowRight" | "]" => Some(KeyAction::Next),
        "ArrowLeft" | "[" => Some(KeyAction::Previous),
        "r" | "R" => Some(KeyAction::Reroll),
        "m" | "M" => Some(KeyAction::ToggleAudio),
        "x" | "X" => Some(KeyAction::Random),
        "t" | "T" => Some(KeyAction::ToggleTextbook),
        "Escape" => Some(KeyAction::CloseModal),
        _ => None,
    }
}

/// Shortcuts are ignored while the user is typing in a form field.
#[inline]
pub fn is_text_entry(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
