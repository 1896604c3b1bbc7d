pub mod constants;
pub mod engine;
pub mod exercise;
pub mod keymap;
pub mod motion;
pub mod schedule;
pub mod settings;
pub mod storage;
pub mod store;

pub use engine::*;
pub use exercise::*;
pub use keymap::*;
pub use motion::*;
pub use schedule::*;
pub use settings::*;
pub use storage::*;
pub use store::*;
