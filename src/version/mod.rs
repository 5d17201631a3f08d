//! Version values and bump rules.

pub mod bump;
pub mod parse;

pub use bump::BumpKind;
pub use parse::Version;
