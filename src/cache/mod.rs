//! Process-wide caches.

mod program_directory;

pub use program_directory::ProgramDirectory;
