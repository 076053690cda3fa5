//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default, and the defaults mount the coin clickable,
//! awake, with fun mode off, a click value of 1 and no cooldown.

use serde::{Deserialize, Serialize};

use crate::coin::{CellMetrics, CoinProps};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub widget: CoinProps,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Frame timing and the pixel size of a terminal cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f64,
    #[serde(default = "default_cell_height")]
    pub cell_height_px: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
        }
    }
}

impl UiConfig {
    /// Non-positive sizes fall back to the defaults.
    pub fn cell_metrics(&self) -> CellMetrics {
        let fallback = CellMetrics::default();
        CellMetrics {
            cell_width_px: if self.cell_width_px > 0.0 {
                self.cell_width_px
            } else {
                fallback.cell_width_px
            },
            cell_height_px: if self.cell_height_px > 0.0 {
                self.cell_height_px
            } else {
                fallback.cell_height_px
            },
        }
    }
}

/// Diagnostic log settings. The TUI owns stdout, so logs go to files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_tick_ms() -> u64 {
    50
}

fn default_cell_width() -> f64 {
    CellMetrics::default().cell_width_px
}

fn default_cell_height() -> f64 {
    CellMetrics::default().cell_height_px
}

fn default_log_dir() -> String {
    "~/.local/share/tapcoin/logs".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.widget, CoinProps::default());
        assert!(cfg.widget.can_click);
        assert_eq!(cfg.widget.click_value, 1.0);
        assert_eq!(cfg.ui.tick_ms, 50);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_widget_table() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [widget]
            can_click = false
            cooldown_remaining = 12
            caption = "hold on"

            [ui]
            cell_width_px = 0.0
            "#,
        )
        .unwrap();
        assert!(!cfg.widget.can_click);
        assert_eq!(cfg.widget.cooldown_remaining, 12.0);
        assert_eq!(cfg.widget.caption.as_deref(), Some("hold on"));
        assert_eq!(cfg.widget.click_value, 1.0);
        assert_eq!(cfg.ui.cell_metrics(), CellMetrics::default());
    }

    #[test]
    fn test_fractional_widget_values() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [widget]
            click_value = 0.5
            cooldown_remaining = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.widget.click_value, 0.5);
        assert_eq!(cfg.widget.tap_value(), 2.5);
        assert_eq!(cfg.widget.cooldown_label(), "2.5");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.widget.fun_mode = true;
        cfg.logging.enabled = true;
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert!(back.widget.fun_mode);
        assert!(back.logging.enabled);
    }
}
