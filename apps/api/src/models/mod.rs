pub mod insight;
pub mod journal;
pub mod mood;
