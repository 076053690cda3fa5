use ratatui::style::{Color, Modifier, Style};

const GOLD: (u8, u8, u8) = (255, 196, 38);
const GOLD_DARK: (u8, u8, u8) = (168, 112, 12);
const NUMBER: (u8, u8, u8) = (255, 244, 214);
const COOLDOWN: (u8, u8, u8) = (120, 200, 255);

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_accent() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }

    /// Border of the clickable container.
    pub fn container(fun: bool, dimmed: bool, tick: u64, opacity: f64) -> Style {
        let base = if fun {
            hue(tick.wrapping_mul(12) as f64, 0.7, 0.9)
        } else {
            (110, 110, 110)
        };
        Self::modified(base, dimmed, opacity)
    }

    /// A cell of the coin. `brightness` is the lit fraction, `rim` selects the
    /// darker edge metal.
    pub fn coin(fun: bool, dimmed: bool, tick: u64, brightness: f64, rim: bool, opacity: f64) -> Style {
        let base = match (fun, rim) {
            (true, false) => hue(tick.wrapping_mul(12) as f64, 0.85, 1.0),
            (true, true) => hue(tick.wrapping_mul(12) as f64 + 40.0, 0.85, 0.7),
            (false, false) => GOLD,
            (false, true) => GOLD_DARK,
        };
        Self::modified(scale_rgb(base, brightness), dimmed, opacity)
    }

    pub fn floating_number(opacity: f64) -> Style {
        Style::default()
            .fg(rgb(scale_rgb(NUMBER, opacity)))
            .add_modifier(Modifier::BOLD)
    }

    pub fn cooldown_ring(opacity: f64) -> Color {
        rgb(scale_rgb(COOLDOWN, opacity))
    }

    pub fn cooldown_number(opacity: f64) -> Style {
        Style::default()
            .fg(rgb(scale_rgb((255, 255, 255), opacity)))
            .add_modifier(Modifier::BOLD)
    }

    fn modified(base: (u8, u8, u8), dimmed: bool, opacity: f64) -> Style {
        let (color, style) = if dimmed {
            let luma = (0.299 * base.0 as f64 + 0.587 * base.1 as f64 + 0.114 * base.2 as f64) * 0.5;
            let g = luma as u8;
            ((g, g, g), Style::default().add_modifier(Modifier::DIM))
        } else {
            (base, Style::default())
        };
        style.fg(rgb(scale_rgb(color, opacity)))
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Multiply a colour towards black; also used to fade by opacity.
fn scale_rgb((r, g, b): (u8, u8, u8), factor: f64) -> (u8, u8, u8) {
    let f = factor.clamp(0.0, 1.5);
    let c = |v: u8| (v as f64 * f).min(255.0) as u8;
    (c(r), c(g), c(b))
}

/// HSV to RGB with `h` in degrees.
fn hue(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0) / 60.0;
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    let to = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to(r), to(g), to(b))
}
