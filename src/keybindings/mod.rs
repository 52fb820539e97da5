use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Wallet list
    MoveUp,
    MoveDown,

    // Snippet viewer
    NextSnippet,
    PrevSnippet,
    CopySnippet,

    CopyWalletId,

    // UI
    ToggleHelp,
    CloseHelp,
    Quit,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::NextSnippet,
        Action::PrevSnippet,
        Action::CopySnippet,
        Action::CopyWalletId,
        Action::ToggleHelp,
        Action::CloseHelp,
        Action::Quit,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Select previous wallet",
            Action::MoveDown => "Select next wallet",
            Action::NextSnippet => "Next snippet",
            Action::PrevSnippet => "Previous snippet",
            Action::CopySnippet => "Copy snippet to clipboard",
            Action::CopyWalletId => "Copy selected wallet id",
            Action::ToggleHelp => "Toggle help",
            Action::CloseHelp => "Close help",
            Action::Quit => "Quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::NextSnippet => "next_snippet",
            Action::PrevSnippet => "prev_snippet",
            Action::CopySnippet => "copy_snippet",
            Action::CopyWalletId => "copy_wallet_id",
            Action::ToggleHelp => "toggle_help",
            Action::CloseHelp => "close_help",
            Action::Quit => "quit",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "move_up" => Ok(Action::MoveUp),
            "move_down" => Ok(Action::MoveDown),
            "next_snippet" => Ok(Action::NextSnippet),
            "prev_snippet" => Ok(Action::PrevSnippet),
            "copy_snippet" => Ok(Action::CopySnippet),
            "copy_wallet_id" => Ok(Action::CopyWalletId),
            "toggle_help" => Ok(Action::ToggleHelp),
            "close_help" => Ok(Action::CloseHelp),
            "quit" => Ok(Action::Quit),
            _ => Err(format!("Unknown action: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Shift is implied by BackTab and by the case of a character key.
    pub fn from_event(event: &KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::BackTab | KeyCode::Char(_) => event.modifiers - KeyModifiers::SHIFT,
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("A");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }

        let key_str = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "S-Tab".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };

        parts.push(&key_str);

        if parts.len() > 1 || key_str.len() > 1 {
            write!(f, "<{}>", parts.join("-"))
        } else {
            write!(f, "{}", key_str)
        }
    }
}

impl FromStr for KeyBinding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.starts_with('<') && s.ends_with('>') && s.len() > 2 {
            let inner = &s[1..s.len() - 1];
            return parse_bracket_notation(inner);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(KeyBinding::new(KeyCode::Char(c), KeyModifiers::NONE)),
            _ => Err(format!("Invalid key binding: {}", s)),
        }
    }
}

fn parse_bracket_notation(s: &str) -> Result<KeyBinding, String> {
    let parts: Vec<&str> = s.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = "";

    for (i, part) in parts.iter().enumerate() {
        if i == parts.len() - 1 {
            key_part = part;
        } else {
            match part.to_uppercase().as_str() {
                "C" | "CTRL" | "CONTROL" => modifiers |= KeyModifiers::CONTROL,
                "A" | "ALT" | "M" | "META" => modifiers |= KeyModifiers::ALT,
                "S" | "SHIFT" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(format!("Unknown modifier: {}", part)),
            }
        }
    }

    let code = parse_key_code(key_part)?;

    // <S-Tab> is delivered as BackTab without a shift modifier
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        return Ok(KeyBinding::new(KeyCode::BackTab, modifiers - KeyModifiers::SHIFT));
    }

    Ok(KeyBinding::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    match s.to_lowercase().as_str() {
        "space" => Ok(KeyCode::Char(' ')),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "enter" | "return" | "cr" => Ok(KeyCode::Enter),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        lower if lower.starts_with('f') && lower.len() > 1 => {
            let n: u8 = lower[1..]
                .parse()
                .map_err(|_| format!("Invalid F key: {}", s))?;
            Ok(KeyCode::F(n))
        }
        _ => Err(format!("Unknown key: {}", s)),
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingCache {
    bindings: HashMap<KeyBinding, Action>,
}

impl KeybindingCache {
    /// Default entries are applied first so that a user entry written in
    /// another notation for the same key (`<S-Tab>` vs `<BackTab>`) wins.
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let defaults = default_bindings();
        let (default_entries, user_entries): (Vec<_>, Vec<_>) = config
            .bindings
            .iter()
            .partition(|(key, action)| defaults.get(*key) == Some(*action));

        let mut bindings = HashMap::new();

        for (key_str, action_str) in default_entries.into_iter().chain(user_entries) {
            match (key_str.parse::<KeyBinding>(), action_str.parse::<Action>()) {
                (Ok(binding), Ok(action)) => {
                    bindings.insert(binding, action);
                }
                (Err(e), _) | (_, Err(e)) => {
                    warn!(key = %key_str, action = %action_str, error = %e, "Ignoring keybinding");
                }
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, event: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&binding).copied()
    }

    /// Keys bound to `action`, sorted for stable display.
    pub fn keys_for(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| k.to_string())
            .collect();
        keys.sort();
        keys
    }
}

impl Default for KeybindingCache {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
    }
}

/// Key notation to action name, e.g. `"y" = "copy_snippet"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeybindingsConfig {
    pub bindings: HashMap<String, String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }
}

impl KeybindingsConfig {
    /// Fill in defaults for keys the user did not bind.
    pub fn merge_with_defaults(mut self) -> Self {
        for (key, action) in default_bindings() {
            self.bindings.entry(key).or_insert(action);
        }
        self
    }
}

fn default_bindings() -> HashMap<String, String> {
    let mut m = HashMap::new();

    m.insert("k".to_string(), "move_up".to_string());
    m.insert("j".to_string(), "move_down".to_string());
    m.insert("<Up>".to_string(), "move_up".to_string());
    m.insert("<Down>".to_string(), "move_down".to_string());
    m.insert("<Tab>".to_string(), "next_snippet".to_string());
    m.insert("<BackTab>".to_string(), "prev_snippet".to_string());
    m.insert("y".to_string(), "copy_snippet".to_string());
    m.insert("c".to_string(), "copy_snippet".to_string());
    m.insert("Y".to_string(), "copy_wallet_id".to_string());
    m.insert("?".to_string(), "toggle_help".to_string());
    m.insert("<Esc>".to_string(), "close_help".to_string());
    m.insert("q".to_string(), "quit".to_string());

    m
}
