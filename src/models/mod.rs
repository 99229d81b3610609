pub mod card;
pub mod collection;
pub mod trade;

pub use card::*;
pub use collection::*;
pub use trade::*;
