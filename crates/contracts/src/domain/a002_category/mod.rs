pub mod aggregate;

pub use aggregate::CategoryInfo;
