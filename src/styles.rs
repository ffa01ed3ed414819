//! Pre-computed static text styles shared by the widgets.
//!
//! Alignment styles and font references are `const`, so they cost nothing at
//! runtime. Color-dependent character styles cannot be constants because the
//! color comes from the active theme; widgets build those on the fly with
//! `MonoTextStyle::new(FONT, theme_color)` against the font references
//! exported here.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_10X20},
    },
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text. Used for tick labels, titles, and cardinal symbols.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned text. Used for LCD header strings.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for LCD value readouts.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels) for tickmark labels and unit strings.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Title font (10x20 pixels) for gauge titles and cardinal symbols.
pub const TITLE_FONT: &MonoFont = &FONT_10X20;

/// Large LCD value font (`ProFont` 24pt).
pub const LCD_FONT_LARGE: &MonoFont = &PROFONT_24_POINT;

/// Medium LCD value font (`ProFont` 18pt), for readouts inside gauges.
pub const LCD_FONT_MEDIUM: &MonoFont = &PROFONT_18_POINT;
