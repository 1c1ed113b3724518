use std::path::PathBuf;

use clap::Parser;

use quadtile::Color;

#[derive(Debug, Parser)]
pub struct Args {
    /// Tile description file to load at startup
    pub tile: Option<PathBuf>,
    /// Fill color override, ARGB hex (e.g. ffcc2010)
    #[arg(short, long, value_parser = parse_argb)]
    pub color: Option<Color>,
    /// Initial window width
    #[arg(long, default_value_t = 1280)]
    pub width: u32,
    /// Initial window height
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

fn parse_argb(s: &str) -> Result<Color, String> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    if digits.len() != 8 {
        return Err("expected 8 hex digits (AARRGGBB)".into());
    }

    let encoded = u32::from_str_radix(digits, 16).map_err(|e| e.to_string())?;

    Ok(Color::from_argb_u32(encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_argb_hex() {
        assert_eq!(parse_argb("ffff0000").unwrap(), Color::red());
        assert_eq!(parse_argb("#ff0000ff").unwrap(), Color::blue());
    }

    #[test]
    fn rejects_short_input() {
        assert!(parse_argb("f00").is_err());
    }

    #[test]
    fn rejects_non_hex_input() {
        assert!(parse_argb("zzzzzzzz").is_err());
    }
}
