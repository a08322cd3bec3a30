pub mod display;

pub use display::render;
