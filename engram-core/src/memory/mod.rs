mod base;
mod category;

pub use base::Memory;
pub use category::Category;
