pub mod reporter;
pub mod usage;
