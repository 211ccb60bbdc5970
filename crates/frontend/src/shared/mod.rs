pub mod category_style;
pub mod components;
pub mod icons;
