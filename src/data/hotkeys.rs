//! Configurable keyboard shortcuts for the sketch actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use eframe::egui;
use tracing::warn;

use crate::config::{config_dir, read_yaml, write_yaml};
use crate::error::{HotkeyParseError, SketchError};
use crate::events::Action;

const HOTKEYS_FILE: &str = "hotkeys.yaml";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlAlt,
    CtrlShift,
    AltShift,
    CtrlAltShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlAlt => "Ctrl+Alt",
            Modifier::CtrlShift => "Ctrl+Shift",
            Modifier::AltShift => "Alt+Shift",
            Modifier::CtrlAltShift => "Ctrl+Alt+Shift",
        };
        write!(f, "{}", s)
    }
}

impl Modifier {
    fn from_flags(ctrl: bool, alt: bool, shift: bool) -> Self {
        match (ctrl, alt, shift) {
            (false, false, false) => Modifier::None,
            (true, false, false) => Modifier::Ctrl,
            (false, true, false) => Modifier::Alt,
            (false, false, true) => Modifier::Shift,
            (true, true, false) => Modifier::CtrlAlt,
            (true, false, true) => Modifier::CtrlShift,
            (false, true, true) => Modifier::AltShift,
            (true, true, true) => Modifier::CtrlAltShift,
        }
    }
}

/// A character key with optional modifiers. Letters compare case-insensitively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            ' ' => "Space".to_string(),
            other => other.to_ascii_uppercase().to_string(),
        };
        if self.modifier == Modifier::None {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifier, key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = HotkeyParseError;

    /// Accepts forms like `C`, `Ctrl+R`, `Alt+Shift+Space`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HotkeyParseError::Empty);
        }
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let Some((last, mods)) = parts.split_last() else {
            return Err(HotkeyParseError::Empty);
        };

        let key = if last.eq_ignore_ascii_case("space") {
            ' '
        } else {
            let mut chars = last.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_ascii_uppercase(),
                _ => return Err(HotkeyParseError::InvalidKey(last.to_string())),
            }
        };

        let owned = || mods.iter().map(|m| m.to_string()).collect::<Vec<_>>();
        if mods.len() > 3 {
            return Err(HotkeyParseError::TooManyModifiers(owned()));
        }
        let (mut ctrl, mut alt, mut shift) = (false, false, false);
        for m in mods {
            let lower = m.to_lowercase();
            let flag = match lower.as_str() {
                "ctrl" | "control" => &mut ctrl,
                "alt" => &mut alt,
                "shift" => &mut shift,
                other => return Err(HotkeyParseError::UnknownModifier(other.to_string())),
            };
            if *flag {
                return Err(HotkeyParseError::UnsupportedCombination(owned()));
            }
            *flag = true;
        }

        Ok(Hotkey {
            modifier: Modifier::from_flags(ctrl, alt, shift),
            key,
        })
    }
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }

    pub fn matches(&self, other: &Hotkey) -> bool {
        self.modifier == other.modifier
            && self.key.to_ascii_uppercase() == other.key.to_ascii_uppercase()
    }
}

/// Shortcut bound to each [`Action`]; `None` leaves the action unbound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub clear: Option<Hotkey>,
    pub reset_scale: Option<Hotkey>,
    pub toggle_derivative: Option<Hotkey>,
    pub toggle_integral: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            clear: Some(Hotkey::new(Modifier::None, 'C')),
            reset_scale: Some(Hotkey::new(Modifier::None, 'R')),
            toggle_derivative: Some(Hotkey::new(Modifier::None, 'D')),
            toggle_integral: Some(Hotkey::new(Modifier::None, 'I')),
        }
    }
}

impl Hotkeys {
    pub fn reset_defaults(&mut self) {
        *self = Hotkeys::default();
    }

    pub fn get(&self, action: Action) -> Option<&Hotkey> {
        match action {
            Action::Clear => self.clear.as_ref(),
            Action::ResetScale => self.reset_scale.as_ref(),
            Action::ToggleDerivative => self.toggle_derivative.as_ref(),
            Action::ToggleIntegral => self.toggle_integral.as_ref(),
        }
    }

    pub fn set(&mut self, action: Action, hotkey: Option<Hotkey>) {
        let slot = match action {
            Action::Clear => &mut self.clear,
            Action::ResetScale => &mut self.reset_scale,
            Action::ToggleDerivative => &mut self.toggle_derivative,
            Action::ToggleIntegral => &mut self.toggle_integral,
        };
        *slot = hotkey;
    }

    /// Every action bound to `pressed`, in [`Action::ALL`] order.
    pub fn actions_for(&self, pressed: &Hotkey) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|a| self.get(*a).is_some_and(|hk| hk.matches(pressed)))
            .collect()
    }

    pub fn load_from(path: &Path) -> Result<Hotkeys, SketchError> {
        read_yaml(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SketchError> {
        write_yaml(path, self)
    }

    /// Load hotkeys from `path`, keeping `fallback` when the file is absent.
    ///
    /// A file that exists but cannot be read or parsed is logged and ignored.
    pub fn load_or(path: &Path, fallback: Hotkeys) -> Hotkeys {
        match Self::load_from(path) {
            Ok(hotkeys) => hotkeys,
            Err(SketchError::NotFound { .. }) => fallback,
            Err(err) => {
                warn!(error = %err, "ignoring hotkeys file");
                fallback
            }
        }
    }

    /// [`Hotkeys::load_or`] on `~/.curvesketch/hotkeys.yaml`.
    pub fn load_default_or(fallback: Hotkeys) -> Hotkeys {
        match config_dir() {
            Ok(dir) => Self::load_or(&dir.join(HOTKEYS_FILE), fallback),
            Err(err) => {
                warn!(error = %err, "cannot locate hotkeys file");
                fallback
            }
        }
    }
}

/// Button tooltip text, e.g. `Clear [C]`.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

fn key_to_char(key: egui::Key) -> Option<char> {
    if key == egui::Key::Space {
        return Some(' ');
    }
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

fn event_to_hotkey(ev: &egui::Event) -> Option<Hotkey> {
    match ev {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers,
            ..
        } => {
            let ctrl = modifiers.ctrl || modifiers.command;
            key_to_char(*key)
                .map(|ch| Hotkey::new(Modifier::from_flags(ctrl, modifiers.alt, modifiers.shift), ch))
        }
        _ => None,
    }
}

/// Actions triggered by key presses in this frame, each at most once.
///
/// Nothing is reported while a text field has keyboard focus.
pub fn detect_actions(cfg: &Hotkeys, ctx: &egui::Context) -> Vec<Action> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    let pressed: Vec<Hotkey> = ctx.input(|i| i.events.iter().filter_map(event_to_hotkey).collect());

    let mut actions: Vec<Action> = Vec::new();
    for hk in &pressed {
        for act in cfg.actions_for(hk) {
            if !actions.contains(&act) {
                actions.push(act);
            }
        }
    }
    actions
}
