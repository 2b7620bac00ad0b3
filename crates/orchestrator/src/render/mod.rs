#![forbid(unsafe_code)]

mod collision_map;

pub use collision_map::{CELL_WIDTH, render_collision_map};
