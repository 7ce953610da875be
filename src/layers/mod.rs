pub mod marker;
pub mod popup;
