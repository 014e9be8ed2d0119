pub mod organization;

pub use organization::{Organization, SMC_BOUNDS};
