// HTTP routes
pub mod health;
pub mod organizations;

pub use health::*;
pub use organizations::*;
