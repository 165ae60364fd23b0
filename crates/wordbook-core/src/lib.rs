pub mod backup;
pub mod dictionary;
pub mod error;
pub mod normalize;
pub mod recent;

pub use dictionary::DictionaryCore;
pub use error::CoreError;
pub use normalize::normalize_word;
pub use recent::RecentlyViewed;

#[cfg(test)]
mod tests;
