use clap::Parser;

use log::error;

mod app;
mod args;

use app::App;
use args::Args;

use quadtile::tile::{Tile, TileRenderer};
use quadtile_common::tile_loader::TileLoader;

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut tile = match &args.tile {
        Some(path) => match TileLoader::load_from_path(path) {
            Ok(t) => t,
            Err(e) => {
                error!("could not read tile description: {e}");
                std::process::exit(1);
            }
        },
        None => Tile::default(),
    };

    if let Some(color) = args.color {
        tile.fill = color;
    }

    let app = App::new(TileRenderer::new(tile), args.width, args.height).unwrap();

    app.run();
}
