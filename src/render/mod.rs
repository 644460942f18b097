mod json_renderer;
#[cfg(test)]
mod tests;
mod view;

use anyhow::Result;

use crate::models::Dataset;

pub use json_renderer::JsonRenderer;
pub use view::View;

/// Consumer of the derived views, e.g. a chart widget or a terminal printer.
///
/// Renderers receive the dataset and pull whichever projection they need, so
/// every render recomputes from the data currently loaded.
pub trait Renderer {
    fn render(&mut self, dataset: &Dataset, view: View) -> Result<()>;
}
