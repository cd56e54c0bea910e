pub mod keywords;
pub mod ranking;
pub mod scoring;
