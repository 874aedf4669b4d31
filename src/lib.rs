#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cli;
pub mod config;
pub mod export;
pub mod model;
pub mod query;
pub mod storage;
