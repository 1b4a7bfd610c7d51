pub mod ci;
pub mod context;
pub mod json;
pub mod summary;
pub mod text;
pub mod theme;
