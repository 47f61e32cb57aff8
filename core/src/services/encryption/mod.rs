//! One-way keyed transform from plain text codes to cipher text
//!
//! The cipher text is the only form of a code that is ever persisted;
//! candidates are verified by re-encrypting and comparing cipher texts.

mod hmac_encryptor;

pub use hmac_encryptor::{Encryptor, HmacEncryptor};
