pub mod mapping;
pub mod value;

pub use self::mapping::Mapping;
pub use self::value::{Decimal, Error as ValueError, Sequence, Value, ValueKind};
