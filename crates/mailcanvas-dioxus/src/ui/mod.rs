mod app;
pub mod components;
pub mod formatting;
pub mod view;

pub use app::App;
