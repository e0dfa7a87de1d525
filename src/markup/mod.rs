pub mod color;
pub mod directive;
pub mod tags;
pub mod token;
