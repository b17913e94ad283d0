pub mod button;
pub mod header;
pub mod maze_map;
pub mod move_pad;
pub mod viewport;
