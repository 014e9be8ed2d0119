// SMC Connect - Directory Data Core
//
// This crate provides the data layer for the community services directory:
// the Organization record with its validation rules, bounded geocode search
// over San Mateo County, and the Category transport representation.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
