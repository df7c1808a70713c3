pub mod error;
pub mod provider;
pub mod types;

pub use error::{Error, Result};
pub use provider::NewsProvider;
pub use types::{Article, NewsFeed, NewsQuery, Source};

pub mod prelude {
    pub use crate::{Article, Error, NewsFeed, NewsProvider, NewsQuery, Result, Source};
}
