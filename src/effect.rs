pub mod layer;
pub mod reduce;
