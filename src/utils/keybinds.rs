//! Key name handling for the cancel keys

use global_hotkey::hotkey::Code;

/// Movement keys that cancel automated fishing by default
pub const DEFAULT_CANCEL_KEYS: [&str; 4] = ["W", "A", "S", "D"];

/// Convert key string to a key code
pub fn string_to_code(key: &str) -> Option<Code> {
    let key_upper = key.trim().to_uppercase();
    match key_upper.as_str() {
        "A" => Some(Code::KeyA),
        "B" => Some(Code::KeyB),
        "C" => Some(Code::KeyC),
        "D" => Some(Code::KeyD),
        "E" => Some(Code::KeyE),
        "F" => Some(Code::KeyF),
        "G" => Some(Code::KeyG),
        "H" => Some(Code::KeyH),
        "I" => Some(Code::KeyI),
        "J" => Some(Code::KeyJ),
        "K" => Some(Code::KeyK),
        "L" => Some(Code::KeyL),
        "M" => Some(Code::KeyM),
        "N" => Some(Code::KeyN),
        "O" => Some(Code::KeyO),
        "P" => Some(Code::KeyP),
        "Q" => Some(Code::KeyQ),
        "R" => Some(Code::KeyR),
        "S" => Some(Code::KeyS),
        "T" => Some(Code::KeyT),
        "U" => Some(Code::KeyU),
        "V" => Some(Code::KeyV),
        "W" => Some(Code::KeyW),
        "X" => Some(Code::KeyX),
        "Y" => Some(Code::KeyY),
        "Z" => Some(Code::KeyZ),
        "ESC" | "ESCAPE" => Some(Code::Escape),
        "SPACE" => Some(Code::Space),
        "UP" => Some(Code::ArrowUp),
        "DOWN" => Some(Code::ArrowDown),
        "LEFT" => Some(Code::ArrowLeft),
        "RIGHT" => Some(Code::ArrowRight),
        _ => None,
    }
}

/// Resolve every configured key, collecting the names that failed
pub fn parse_keys<S: AsRef<str>>(names: &[S]) -> Result<Vec<Code>, Vec<String>> {
    let mut codes = Vec::with_capacity(names.len());
    let mut invalid = Vec::new();

    for name in names {
        match string_to_code(name.as_ref()) {
            Some(code) => codes.push(code),
            None => invalid.push(name.as_ref().to_string()),
        }
    }

    if invalid.is_empty() {
        Ok(codes)
    } else {
        Err(invalid)
    }
}
