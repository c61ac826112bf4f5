pub mod accumulator;
pub mod base64;
pub mod request;
