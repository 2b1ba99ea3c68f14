//! Output encoders (plain text).

mod text;

pub use text::TextEncoder;
