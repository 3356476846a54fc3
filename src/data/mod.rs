pub mod loader;
pub mod offset;
pub mod series;
