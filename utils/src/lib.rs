mod eval;
pub mod material;
mod position;
mod snapshot;

pub use eval::white_relative;
pub use material::{color_name, exchange_value, is_slider, piece_group_name, piece_name};
pub use position::{load_position, PositionError};
pub use snapshot::Snapshot;
