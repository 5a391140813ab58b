//! Command environment and file access
//!
//! - `segment`: A sliding read window over one file
//! - `session`: State shared by every command
//! - `workspace`: Reading and writing the files named on the command line

pub mod segment;
pub mod session;
pub mod workspace;
