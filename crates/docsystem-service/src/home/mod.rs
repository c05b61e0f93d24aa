//! Home page: feature cards, headline stats and global search.

pub mod service;

pub use service::{FeatureCard, HomePage, HomeService, SearchResults, Stat};
