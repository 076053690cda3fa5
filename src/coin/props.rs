use serde::{Deserialize, Serialize};

/// Each tap is worth this many times the click value.
const VALUE_MULTIPLIER: f64 = 5.0;

/// Caller-owned configuration of the coin. Read-only to the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinProps {
    #[serde(default = "default_true")]
    pub can_click: bool,
    #[serde(default)]
    pub sleeping: bool,
    #[serde(default)]
    pub fun_mode: bool,
    #[serde(default = "default_click_value")]
    pub click_value: f64,
    #[serde(default)]
    pub cooldown_remaining: f64,
    /// Decorative content drawn inside the clickable area.
    #[serde(default)]
    pub caption: Option<String>,
}

impl Default for CoinProps {
    fn default() -> Self {
        Self {
            can_click: true,
            sleeping: false,
            fun_mode: false,
            click_value: 1.0,
            cooldown_remaining: 0.0,
            caption: None,
        }
    }
}

/// Which of the two views the props select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Clickable,
    Cooldown,
}

impl CoinProps {
    pub fn mode(&self) -> Mode {
        if self.can_click {
            Mode::Clickable
        } else {
            Mode::Cooldown
        }
    }

    /// Value earned by one tap.
    pub fn tap_value(&self) -> f64 {
        self.click_value * VALUE_MULTIPLIER
    }

    /// Countdown text; zero (or NaN) shows a placeholder instead of `0`.
    /// Whole numbers print without a fraction.
    pub fn cooldown_label(&self) -> String {
        if self.cooldown_remaining == 0.0 || self.cooldown_remaining.is_nan() {
            "nothing".to_string()
        } else {
            self.cooldown_remaining.to_string()
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_click_value() -> f64 {
    1.0
}
