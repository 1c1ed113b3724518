pub mod tile_loader;
