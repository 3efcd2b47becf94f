// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/query/processor/stream/function/mod.rs
pub mod tokenize_stream_processor;
pub mod tokens;

pub use self::tokenize_stream_processor::{
    TokenizeStreamProcessor, TOKENIZE_NAME, TOKENIZE_NAMESPACE, TOKENIZE_QUALIFIED_NAME,
    TOKEN_ATTRIBUTE,
};
pub use self::tokens::Tokens;
