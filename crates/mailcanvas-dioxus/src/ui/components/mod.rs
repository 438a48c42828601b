pub mod block_card;
pub mod editor_panel;
pub mod error_screen;
pub mod palette;
pub mod template_canvas;

pub use block_card::*;
pub use editor_panel::*;
pub use error_screen::*;
pub use palette::*;
pub use template_canvas::*;
