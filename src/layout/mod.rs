pub mod cell;
pub mod engine;
pub mod measure;
