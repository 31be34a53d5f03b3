//! Key-press types delivered by the input surface: Keystroke, Modifiers, KeyCode

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code as reported by the input surface
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,

    /// Any key name the control has no meaning for
    Other(String),
}

impl KeyCode {
    /// Parse a key name (`"Enter"`, `"esc"`, `"ArrowLeft"`, `"a"`).
    ///
    /// Never fails: unknown names become [`KeyCode::Other`].
    pub fn from_name(name: &str) -> KeyCode {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return if c == ' ' {
                KeyCode::Space
            } else {
                KeyCode::Char(c.to_ascii_lowercase())
            };
        }

        match name.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "escape" | "esc" => KeyCode::Escape,
            "tab" => KeyCode::Tab,
            "backspace" | "back" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "space" | "spacebar" => KeyCode::Space,

            "up" | "arrowup" => KeyCode::Up,
            "down" | "arrowdown" => KeyCode::Down,
            "left" | "arrowleft" => KeyCode::Left,
            "right" | "arrowright" => KeyCode::Right,

            "home" => KeyCode::Home,
            "end" => KeyCode::End,

            _ => KeyCode::Other(name.to_string()),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A single keystroke: a key with modifiers
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Parse a key string like `"shift+enter"` or `"Escape"`.
    ///
    /// Modifier names are case-insensitive. The last non-modifier part is the key.
    pub fn parse(key_str: &str) -> Keystroke {
        // A lone "+" is the plus key, not an empty modifier list
        if key_str == "+" {
            return Keystroke::key(KeyCode::Char('+'));
        }

        let mut mods = Modifiers::NONE;
        let mut key = None;

        for part in key_str.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => mods = mods | Modifiers::CTRL,
                "shift" => mods = mods | Modifiers::SHIFT,
                "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
                "meta" | "cmd" | "super" | "win" => mods = mods | Modifiers::META,
                _ => key = Some(KeyCode::from_name(part)),
            }
        }

        Keystroke {
            key: key.unwrap_or_else(|| KeyCode::Other(key_str.to_string())),
            mods,
        }
    }

    /// Enter without Shift or Meta confirms the edit
    pub fn is_submit(&self) -> bool {
        self.key == KeyCode::Enter && !self.mods.shift() && !self.mods.meta()
    }

    /// Escape discards the edit, whatever modifiers are held
    pub fn is_cancel(&self) -> bool {
        self.key == KeyCode::Escape
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());
        assert!(!mods.meta());
        assert!(Modifiers::NONE.is_empty());
    }

    #[test]
    fn test_named_keys_case_insensitive() {
        assert_eq!(KeyCode::from_name("Enter"), KeyCode::Enter);
        assert_eq!(KeyCode::from_name("ESC"), KeyCode::Escape);
        assert_eq!(KeyCode::from_name("ArrowLeft"), KeyCode::Left);
        assert_eq!(KeyCode::from_name("A"), KeyCode::Char('a'));
        assert_eq!(KeyCode::from_name(" "), KeyCode::Space);
    }

    #[test]
    fn test_unknown_key_is_other() {
        assert_eq!(
            KeyCode::from_name("MediaPlayPause"),
            KeyCode::Other("MediaPlayPause".to_string())
        );
    }

    #[test]
    fn test_parse_with_modifiers() {
        let stroke = Keystroke::parse("shift+Enter");
        assert_eq!(stroke.key, KeyCode::Enter);
        assert!(stroke.mods.shift());
        assert!(!stroke.is_submit());

        let stroke = Keystroke::parse("ctrl+enter");
        assert!(stroke.is_submit());

        assert_eq!(Keystroke::parse("+").key, KeyCode::Char('+'));
    }

    #[test]
    fn test_submit_and_cancel_keys() {
        assert!(Keystroke::parse("Enter").is_submit());
        assert!(!Keystroke::parse("meta+Enter").is_submit());
        assert!(Keystroke::parse("Escape").is_cancel());
        assert!(Keystroke::parse("shift+Escape").is_cancel());
        assert!(!Keystroke::parse("Tab").is_submit());
    }

    #[test]
    fn test_keystroke_display() {
        let stroke = Keystroke::new(KeyCode::Enter, Modifiers::SHIFT);
        assert_eq!(format!("{}", stroke), "Shift+Enter");
        assert_eq!(format!("{}", Keystroke::key(KeyCode::Char('s'))), "S");
    }
}
