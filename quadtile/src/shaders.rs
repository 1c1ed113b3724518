/// Name of the vertex attribute carrying the tile corner positions.
pub const POSITION_ATTRIBUTE: &str = "position";

/// Name of the uniform carrying the fill color.
pub const FILL_UNIFORM: &str = "fill_color";

pub const TILE_VERT: &str = include_str!("gl_shaders/tile.glsl");
pub const SOLID_FRAG: &str = include_str!("gl_shaders/solid.glsl");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_declare_expected_names() {
        assert!(TILE_VERT.contains(POSITION_ATTRIBUTE));
        assert!(SOLID_FRAG.contains(FILL_UNIFORM));
    }

    #[test]
    fn sources_start_with_version_directive() {
        assert!(TILE_VERT.starts_with("#version"));
        assert!(SOLID_FRAG.starts_with("#version"));
    }
}
