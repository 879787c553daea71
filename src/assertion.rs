pub mod core;
pub mod eqish;
pub mod equal_to;

pub use self::core::{expect, since, Description, Locatable, Mismatch, Subject};
pub use self::eqish::Eqish;
pub use self::equal_to::EqualTo;
