mod file;
mod ingestor;
#[cfg(test)]
mod tests;

pub use file::{FileSource, SelectedFile};
pub use ingestor::Ingestor;
