//! Color and font size tokens.

use bevy::prelude::*;

// === Ink / Paper ===

pub const INK: Color = Color::BLACK;
pub const PAPER: Color = Color::WHITE;

/// Faded foreground for secondary text, as an alpha on the current ink.
pub const MUTED_ALPHA: f32 = 0.5;
/// Alpha for tracks and hairlines behind a foreground fill.
pub const FAINT_ALPHA: f32 = 0.2;

/// Translucent toast backdrop.
pub const TOAST_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.85);
pub const TOAST_TEXT: Color = Color::WHITE;

// === Font Size Tokens ===

pub const FONT_SIZE_DISPLAY: f32 = 144.0;
pub const FONT_SIZE_TITLE: f32 = 96.0;
pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_SUBHEADER: f32 = 40.0;
pub const FONT_SIZE_LABEL: f32 = 24.0;
pub const FONT_SIZE_BODY: f32 = 18.0;
pub const FONT_SIZE_SMALL: f32 = 14.0;
