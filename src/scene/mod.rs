pub mod builder;
pub mod shape;
pub mod state;
