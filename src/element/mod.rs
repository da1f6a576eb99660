mod core;
pub use self::core::*;

mod types;
pub use types::*;

mod coercion;
pub use coercion::*;

mod dyncompare;
pub use dyncompare::*;

mod builtin;

mod custom;
pub use custom::*;
