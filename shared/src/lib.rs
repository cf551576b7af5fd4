pub mod constants;
pub mod error;
pub mod outcome;
pub mod prize_config;
pub mod randomness;
pub mod shared_wheel_game;
pub mod validation;
pub mod wheel_geometry;

pub use error::WheelError;
