pub mod project;
pub mod standardize;
pub mod summary;
