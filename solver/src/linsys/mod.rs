mod error;
mod gauss;
mod system;

pub use self::error::*;
pub use self::system::LinearSystem;
