use gl_wrapper::geometry::{Geometry, GeometryBuilder, PrimitiveMode, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

use log::warn;

use crate::shaders;
use crate::surface::SurfaceRenderer;
use crate::Color;

/// Four corners of the centered tile, drawn as a triangle strip.
#[rustfmt::skip]
pub const TILE_STRIP: [f32; 8] = [
    -0.5, -0.5,
    0.5, -0.5,
    -0.5, 0.5,
    0.5, 0.5,
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tile {
    pub fill: Color,
    pub clear: Color,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            fill: Color::red(),
            clear: Color::black(),
        }
    }
}

/// Draws a single solid-colored tile over the clear color.
///
/// GL objects are created in `surface_created` and live until the renderer
/// is dropped. A renderer whose program failed to build keeps presenting
/// clear-color frames.
pub struct TileRenderer {
    tile: Tile,
    gl: GlRenderer,
    program: Option<Program>,
    quad: Option<Geometry>,
    fill_location: Option<i32>,
}

impl TileRenderer {
    pub fn new(tile: Tile) -> Self {
        Self {
            tile,
            gl: GlRenderer::new(),
            program: None,
            quad: None,
            fill_location: None,
        }
    }

    pub fn set_tile(&mut self, tile: Tile) {
        self.tile = tile;
    }

    pub fn tile(&self) -> Tile {
        self.tile
    }
}

impl SurfaceRenderer for TileRenderer {
    fn surface_created(&mut self) {
        let program = match ProgramBuilder::new(shaders::TILE_VERT, shaders::SOLID_FRAG).build() {
            Ok(p) => p,
            Err(e) => {
                warn!("could not build tile program: {e}");
                return;
            }
        };

        self.fill_location = program.uniform_location(shaders::FILL_UNIFORM);

        if self.fill_location.is_none() {
            warn!("no '{}' uniform in tile program", shaders::FILL_UNIFORM);
        }

        let quad = GeometryBuilder::new(&TILE_STRIP)
            .with_attribute(shaders::POSITION_ATTRIBUTE, VertexAttribute::Vec2)
            .mode(PrimitiveMode::TriangleStrip)
            .build(&program);

        self.quad = match quad {
            Ok(q) => Some(q),
            Err(e) => {
                warn!("could not upload tile vertices: {e}");
                None
            }
        };

        self.program = Some(program);
    }

    fn surface_changed(&mut self, width: u32, height: u32) {
        self.gl.resize(width, height);
    }

    fn draw_frame(&mut self) {
        let clear = self.tile.clear.clip();
        self.gl.clear_color(clear.r, clear.g, clear.b);

        if let (Some(program), Some(quad)) = (&self.program, &self.quad) {
            self.gl.use_program(program);

            if let Some(location) = self.fill_location {
                program.set_vec4(location, self.tile.fill.clip().rgba());
            }

            self.gl.draw(quad, program);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_holds_four_vertices() {
        assert_eq!(TILE_STRIP.len() / 2, 4);
    }

    #[test]
    fn default_tile_is_red_on_black() {
        let tile = Tile::default();

        assert_eq!(tile.fill, Color::red());
        assert_eq!(tile.clear, Color::black());
    }

    #[test]
    fn tile_swap_takes_effect() {
        let mut renderer = TileRenderer::new(Tile::default());

        renderer.set_tile(Tile {
            fill: Color::blue(),
            ..Tile::default()
        });

        assert_eq!(renderer.tile().fill, Color::blue());
    }
}
