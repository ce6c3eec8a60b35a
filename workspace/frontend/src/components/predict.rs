mod form;
mod results;
mod view;

pub use view::PredictPage;
