pub mod category_filter;
pub mod ui;
