pub mod keyboard;
pub mod panel;
pub mod pointer;
pub mod scroll;

pub use keyboard::*;
pub use panel::*;
pub use pointer::*;
pub use scroll::*;
