pub mod text;
pub mod validators;

pub use text::*;
pub use validators::*;
