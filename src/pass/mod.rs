//! Password generation and output.

pub mod charset;
mod error;
mod generate;
pub mod output;

pub use charset::{CharClass, ClassSet};
pub use error::InvalidRequest;
pub use generate::{GenerationRequest, MAX_LENGTH, Password, generate, generate_batch, generate_with};
pub use output::SecureBufWriter;
