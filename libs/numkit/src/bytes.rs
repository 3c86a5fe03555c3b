//! Binary data processing utilities
//!
//! Provides byte order handling, number ⇄ byte conversions, stream
//! read/write of fixed-width values and binary rendering.
//!
//! # Design Principles
//!
//! - **Reentrant**: bytes are staged in stack-local arrays sized to the type
//! - **Type-safe**: `ByteOrder` enum instead of bare reversal flags where possible
//! - **Total**: short inputs decode with zero padding instead of failing

pub mod binary;
pub mod byte_order;
pub mod conversions;
pub mod stream;

pub use binary::*;
pub use byte_order::{is_big_endian, is_little_endian, ByteOrder};
pub use conversions::*;
pub use stream::*;
