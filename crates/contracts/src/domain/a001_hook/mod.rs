pub mod aggregate;

pub use aggregate::Hook;
