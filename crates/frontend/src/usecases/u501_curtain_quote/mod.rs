pub mod api;
mod view;
mod view_model;

pub use view::CurtainQuoteView;
