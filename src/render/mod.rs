pub mod port;
pub mod renderer;
pub mod terminal;

pub use port::RenderPort;
pub use renderer::{Notice, Renderer};
pub use terminal::TerminalPort;
