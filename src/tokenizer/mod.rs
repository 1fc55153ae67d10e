mod error;
mod stream;
mod token;

pub use error::{TokenizeError, TokenizeResult};
pub use stream::Tokenizer;
pub use token::Token;
