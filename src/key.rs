//! Key bindings shared by the browser and sidebar components.
//!
//! A [`Binding`] groups the key codes that trigger one action together with
//! the short label and description shown in help lines. Components expose
//! their bindings through the [`KeyMap`] trait so a host application can
//! render contextual help without knowing the component internals.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"↑/k"`.
    pub key: String,
    /// What the key does, e.g. `"up"`.
    pub desc: String,
}

/// A set of key codes bound to a single action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding that fires for any of `keys`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_browse::key::Binding;
    /// use crossterm::event::KeyCode;
    ///
    /// let toggle = Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
    ///     .with_help("enter", "toggle group");
    /// assert_eq!(toggle.help().desc, "toggle group");
    /// ```
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the key codes this binding listens to.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether `key_msg` triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.contains(&key_msg.key)
    }
}

/// Components that can describe their key bindings for help rendering.
pub trait KeyMap {
    /// The handful of bindings shown in a one-line help bar.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders bindings as a single `key desc • key desc` line.
///
/// Disabled bindings and bindings without help text are skipped.
pub fn short_help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled() && !b.help.key.is_empty())
        .map(|b| format!("{} {}", b.help.key, b.help.desc))
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(key: KeyCode) -> KeyMsg {
        KeyMsg {
            key,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_binding_matches_any_listed_key() {
        let binding = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(binding.matches(&press(KeyCode::Up)));
        assert!(binding.matches(&press(KeyCode::Char('k'))));
        assert!(!binding.matches(&press(KeyCode::Down)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]);
        binding.set_enabled(false);
        assert!(!binding.matches(&press(KeyCode::Enter)));
        binding.set_enabled(true);
        assert!(binding.matches(&press(KeyCode::Enter)));
    }

    #[test]
    fn test_short_help_line_skips_unlabelled() {
        let up = Binding::new(vec![KeyCode::Up]).with_help("↑", "up");
        let hidden = Binding::new(vec![KeyCode::Tab]);
        let quit = Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit");
        assert_eq!(short_help_line(&[&up, &hidden, &quit]), "↑ up • q quit");
    }
}
