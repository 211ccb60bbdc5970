pub mod a001_hook;
pub mod a002_category;
