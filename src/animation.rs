pub mod descriptor;
pub mod group;
