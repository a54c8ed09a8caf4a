mod json;
mod renderer;
mod table;
mod text_chart;

pub use json::JsonRenderer;
pub use renderer::Renderer;
pub use table::TableRenderer;
pub use text_chart::TextChartRenderer;
