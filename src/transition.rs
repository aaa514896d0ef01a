pub mod environment;
pub mod primitives;
pub mod shape;
pub mod value;
