pub mod color_token;
pub mod hook_category;

pub use color_token::ColorToken;
pub use hook_category::HookCategory;
