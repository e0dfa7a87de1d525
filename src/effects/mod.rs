pub mod pipeline;
pub mod registry;
