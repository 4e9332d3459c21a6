pub mod entry;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod preprocess;
pub mod store;
pub mod validate;

pub use entry::{Entry, NewEntry};
pub use error::{StoreError, SubmitError, ValidationError};
pub use lexicon::{Lexicon, Lookup};
pub use normalize::Normalizer;
pub use store::KeywordStore;
