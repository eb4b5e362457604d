pub mod api;
pub mod app;
pub mod components;
pub mod editor;
pub mod interop;
pub mod notify;
pub mod route;
pub mod state;
pub mod stream;
pub mod styles;
pub mod theme;

pub use app::App;
