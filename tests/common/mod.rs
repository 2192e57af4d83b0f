mod app;
mod factory;

pub use app::*;
pub use factory::*;
