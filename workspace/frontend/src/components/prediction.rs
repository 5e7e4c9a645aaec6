mod fields;
mod model_selector;
mod result_panel;
mod view;

pub use view::PredictionView;
