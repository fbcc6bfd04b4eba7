//! Phone number normalization against per-country numbering plans

mod normalizer;

pub use normalizer::PhoneNormalizer;
