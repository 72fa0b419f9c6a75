use crate::app::{App, AppMode};

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub short_description: String,
}

impl Keybinding {
    pub fn new(key: impl Into<String>, short_description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// Footer form: `key: description | key: description`
    pub fn help_line(&self) -> String {
        self.bindings
            .iter()
            .map(|b| format!("{}: {}", b.key, b.short_description))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}

pub struct NormalModeProvider {
    pub scoring: bool,
}

impl KeybindingProvider for NormalModeProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![
            Keybinding::new("a", "add"),
            Keybinding::new("j/k", "select"),
        ];
        if self.scoring {
            bindings.push(Keybinding::new("+/-", "±1"));
            bindings.push(Keybinding::new("]/[", "±10"));
        }
        bindings.push(Keybinding::new("m", "move"));
        bindings.push(Keybinding::new("dd", "delete"));
        if self.scoring {
            bindings.push(Keybinding::new("RR", "reset"));
        }
        bindings.push(Keybinding::new("q", "quit"));
        KeybindingContext::new("Normal", bindings)
    }
}

pub struct EditingProvider;

impl KeybindingProvider for EditingProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Editing",
            vec![
                Keybinding::new("Enter", "add player"),
                Keybinding::new("Esc", "done"),
            ],
        )
    }
}

pub struct GrabProvider;

impl KeybindingProvider for GrabProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Moving",
            vec![
                Keybinding::new("j/k", "move"),
                Keybinding::new("m/Enter", "drop"),
                Keybinding::new("Esc", "cancel"),
            ],
        )
    }
}

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        match app.mode {
            AppMode::Normal => Box::new(NormalModeProvider {
                scoring: app.scoring_enabled(),
            }),
            AppMode::Editing => Box::new(EditingProvider),
            AppMode::Grab { .. } => Box::new(GrabProvider),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_keys_hidden_without_scoring() {
        let help = NormalModeProvider { scoring: false }.get_context().help_line();
        assert!(!help.contains("±1"));
        assert!(!help.contains("reset"));
        assert!(help.contains("dd: delete"));

        let help = NormalModeProvider { scoring: true }.get_context().help_line();
        assert!(help.contains("]/[: ±10"));
    }
}
