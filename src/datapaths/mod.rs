mod error;
mod materializer;
mod spec;

pub use error::DatapathsError;
pub use materializer::create_directory_structure;
pub use spec::DirSpec;
