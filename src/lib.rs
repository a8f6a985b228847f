#![forbid(unsafe_code)]

pub mod combinations;
pub mod config;
pub mod datamodel;
pub mod error;
pub mod exporters;
pub mod http;
pub mod parsing;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
