pub mod project;

pub use project::ProjectFilesystem;
