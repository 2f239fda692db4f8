//! Markup adapter for the host experiment runner.

mod core;

pub use self::core::{HtmlRenderer, RendererSettings};
