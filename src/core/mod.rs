pub mod cache;
pub mod parser;
pub mod pipeline;
pub mod summarizer;
pub mod transcript;

pub use cache::*;
pub use pipeline::*;
pub use summarizer::*;
pub use transcript::*;
