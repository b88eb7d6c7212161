//! Theme definition for pitwall
//!
//! One immutable theme record, built on first access and shared by every
//! view for the lifetime of the process. Views receive it through a
//! [`ThemeProvider`] instead of reaching for individual colors.

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::collections::BTreeMap;

static THEME: Lazy<Theme> = Lazy::new(Theme::pitwall);

/// The process-wide theme record
pub fn theme() -> &'static Theme {
    &THEME
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub default: Color,
    pub paper: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColor {
    pub main: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub mode: PaletteMode,
    pub background: Background,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
}

impl Palette {
    /// Main text color, derived from the mode
    pub fn text_primary(&self) -> Color {
        match self.mode {
            PaletteMode::Dark => Color::Rgb(255, 255, 255),
            PaletteMode::Light => Color::Rgb(33, 33, 33),
        }
    }

    /// Secondary text color (hints, captions)
    pub fn text_secondary(&self) -> Color {
        match self.mode {
            PaletteMode::Dark => Color::Rgb(179, 179, 179),
            PaletteMode::Light => Color::Rgb(117, 117, 117),
        }
    }

    pub fn divider(&self) -> Color {
        match self.mode {
            PaletteMode::Dark => Color::Rgb(52, 60, 80),
            PaletteMode::Light => Color::Rgb(224, 224, 224),
        }
    }

    pub fn error(&self) -> Color {
        match self.mode {
            PaletteMode::Dark => Color::Rgb(244, 67, 54),
            PaletteMode::Light => Color::Rgb(211, 47, 47),
        }
    }

    pub fn success(&self) -> Color {
        match self.mode {
            PaletteMode::Dark => Color::Rgb(102, 187, 106),
            PaletteMode::Light => Color::Rgb(46, 125, 50),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub border_radius: u16,
}

/// Text style keys that may carry their own font rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextStyleKey {
    H1,
    H2,
    Caption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRule {
    pub family: &'static str,
    pub size_px: u16,
    pub weight: u16,
}

impl FontRule {
    pub fn is_bold(&self) -> bool {
        self.weight >= 600
    }
}

const DEFAULT_FONT_SIZE: u16 = 14;
const DEFAULT_FONT_WEIGHT: u16 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    pub variants: BTreeMap<TextStyleKey, FontRule>,
}

impl Typography {
    /// Font rule for a style key, falling back to the base family
    pub fn rule(&self, key: TextStyleKey) -> FontRule {
        self.variants.get(&key).cloned().unwrap_or(FontRule {
            family: self.font_family,
            size_px: DEFAULT_FONT_SIZE,
            weight: DEFAULT_FONT_WEIGHT,
        })
    }
}

/// Complete theme record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub shape: Shape,
    pub typography: Typography,
}

impl Theme {
    /// Dark race-control theme: near-black panels, red primary, cyan secondary
    pub fn pitwall() -> Self {
        let mut variants = BTreeMap::new();
        variants.insert(
            TextStyleKey::H1,
            FontRule {
                family: "Montserrat, sans-serif",
                size_px: 22,
                weight: 700,
            },
        );

        Self {
            palette: Palette {
                mode: PaletteMode::Dark,
                background: Background {
                    default: Color::Rgb(0x0B, 0x0F, 0x1A),
                    paper: Color::Rgb(0x14, 0x1B, 0x2D),
                },
                primary: PaletteColor {
                    main: Color::Rgb(0xE1, 0x06, 0x00),
                },
                secondary: PaletteColor {
                    main: Color::Rgb(0x00, 0xD1, 0xFF),
                },
            },
            shape: Shape { border_radius: 12 },
            typography: Typography {
                font_family: "Roboto, sans-serif",
                variants,
            },
        }
    }

    // === TERMINAL MAPPING ===

    pub fn border_type(&self) -> BorderType {
        if self.shape.border_radius > 0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }

    /// Terminal style for a text style key. Cells have a single size, so
    /// only the weight survives.
    pub fn heading(&self, key: TextStyleKey) -> Style {
        let style = Style::default()
            .fg(self.palette.text_primary())
            .bg(self.palette.background.paper);
        if self.typography.rule(key).is_bold() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Secondary text under a heading
    pub fn caption(&self) -> Style {
        let style = self.text_dim();
        if self.typography.rule(TextStyleKey::Caption).is_bold() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    // === STYLE HELPERS ===

    /// Baseline style for every cell: default background, primary text
    pub fn block_style(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary())
            .bg(self.palette.background.default)
    }

    pub fn paper(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary())
            .bg(self.palette.background.paper)
    }

    pub fn text(&self) -> Style {
        self.paper()
    }

    pub fn text_dim(&self) -> Style {
        Style::default()
            .fg(self.palette.text_secondary())
            .bg(self.palette.background.paper)
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.palette.secondary.main)
            .bg(self.palette.background.paper)
    }

    pub fn border(&self) -> Style {
        Style::default()
            .fg(self.palette.divider())
            .bg(self.palette.background.default)
    }

    pub fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.palette.primary.main)
            .bg(self.palette.background.default)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default()
            .fg(self.palette.text_secondary())
            .bg(self.palette.background.default)
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.palette.primary.main)
            .bg(self.palette.background.default)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.palette.error())
            .bg(self.palette.background.default)
    }

    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.palette.success())
            .bg(self.palette.background.default)
    }

    pub fn status_bar(&self) -> Style {
        Style::default()
            .fg(self.palette.text_secondary())
            .bg(self.palette.background.paper)
    }
}

/// Hands the shared theme to every view below the shell.
///
/// The record behind it is never mutated; swapping themes means building
/// a new provider.
#[derive(Debug, Clone, Copy)]
pub struct ThemeProvider {
    theme: &'static Theme,
}

impl ThemeProvider {
    pub fn new(theme: &'static Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(theme())
    }
}
