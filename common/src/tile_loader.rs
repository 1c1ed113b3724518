use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::Deserialize;

use quadtile::tile::Tile;
use quadtile::Color;

pub struct TileLoader {}

impl TileLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Tile, LoaderError> {
        let tile_str = std::fs::read_to_string(path).map_err(LoaderError::InputError)?;

        Self::load_str(&tile_str)
    }

    pub fn load_str(tile_str: &str) -> Result<Tile, LoaderError> {
        let file: TileFile = json5::from_str(tile_str).map_err(LoaderError::FormatError)?;

        let fill = build_color(&file.fill)?;

        let clear = match &file.clear {
            Some(stub) => build_color(stub)?,
            None => Color::black(),
        };

        Ok(Tile { fill, clear })
    }
}

fn build_color(stub: &ColorStub) -> Result<Color, LoaderError> {
    let color = match stub {
        ColorStub::Name(name) => match name.as_str() {
            "red" => Color::red(),
            "green" => Color::green(),
            "blue" => Color::blue(),
            "black" => Color::black(),
            "white" => Color::white(),
            _ => return Err(LoaderError::UnknownColor(name.clone())),
        },
        ColorStub::Rgb([r, g, b]) => Color::new(*r, *g, *b, 1.0),
        ColorStub::Rgba([r, g, b, a]) => Color::new(*r, *g, *b, *a),
    };

    Ok(color.clip())
}

#[derive(Debug, Deserialize)]
struct TileFile {
    fill: ColorStub,
    clear: Option<ColorStub>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorStub {
    Name(String),
    Rgb([f32; 3]),
    Rgba([f32; 4]),
}

#[derive(Debug)]
pub enum LoaderError {
    InputError(std::io::Error),
    FormatError(json5::Error),
    UnknownColor(String),
}

impl Display for LoaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputError(e) => f.write_fmt(format_args!("{e}")),
            Self::FormatError(e) => f.write_fmt(format_args!("{e}")),
            Self::UnknownColor(name) => f.write_fmt(format_args!("unknown color '{name}'")),
        }
    }
}

impl Error for LoaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputError(e) => Some(e),
            Self::FormatError(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        let tile = TileLoader::load_str(r#"{ fill: "red" }"#).unwrap();

        assert_eq!(tile.fill, Color::red());
        assert_eq!(tile.clear, Color::black());
    }

    #[test]
    fn component_arrays() {
        let tile = TileLoader::load_str("{ fill: [0.2, 0.4, 0.6], clear: [0.1, 0.1, 0.1, 0.5] }")
            .unwrap();

        assert_eq!(tile.fill, Color::new(0.2, 0.4, 0.6, 1.0));
        assert_eq!(tile.clear, Color::new(0.1, 0.1, 0.1, 0.5));
    }

    #[test]
    fn components_are_clipped() {
        let tile = TileLoader::load_str("{ fill: [2.0, -1.0, 0.5] }").unwrap();

        assert_eq!(tile.fill, Color::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn unknown_color_name() {
        let err = TileLoader::load_str(r#"{ fill: "vermilion" }"#).unwrap_err();

        assert!(matches!(err, LoaderError::UnknownColor(_)));
    }

    #[test]
    fn missing_fill_is_an_error() {
        let err = TileLoader::load_str("{}").unwrap_err();

        assert!(matches!(err, LoaderError::FormatError(_)));
    }

    #[test]
    fn invalid_syntax() {
        let err = TileLoader::load_str("{ fill: ").unwrap_err();

        assert!(matches!(err, LoaderError::FormatError(_)));
    }
}
