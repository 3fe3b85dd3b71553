pub mod completion;
pub mod config;
pub mod error;
pub mod oembed;

pub use completion::{ArticleGenerator, ChatCompletionGenerator};
pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use oembed::{OembedTitleResolver, TitleResolver, UNKNOWN_TITLE};
