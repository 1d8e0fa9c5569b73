// src/utilities/color.rs
//
// Palette strings ("#RRGGBB") to nannou colors

use anyhow::{bail, Context, Result};
use nannou::prelude::*;

pub fn parse_hex_color(hex: &str) -> Result<Rgb<f32>> {
    let digits = hex
        .trim()
        .strip_prefix('#')
        .with_context(|| format!("color '{}' must start with '#'", hex))?;

    if digits.len() != 6 || !digits.is_ascii() {
        bail!("color '{}' must have exactly six hex digits", hex);
    }

    let channel = |range: std::ops::Range<usize>| -> Result<f32> {
        let value = u8::from_str_radix(&digits[range], 16)
            .with_context(|| format!("color '{}' has an invalid hex digit", hex))?;
        Ok(value as f32 / 255.0)
    };

    Ok(rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
