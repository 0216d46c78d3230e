mod decimal;
mod item;

pub use decimal::*;
pub use item::*;
