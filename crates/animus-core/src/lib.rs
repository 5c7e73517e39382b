pub mod audio;
pub mod constants;
pub mod error;
pub mod hud;
pub mod input;
pub mod library;
pub mod registry;
pub mod sections;
pub mod state;

pub use audio::*;
pub use error::*;
pub use hud::*;
pub use input::*;
pub use library::*;
pub use registry::*;
pub use sections::*;
pub use state::*;
