//! # vershift
//!
//! A library (and command-line tool) for parsing, comparing, and transforming
//! version strings of arbitrary numeric-dot-separated (or otherwise-delimited)
//! form.
//!
//! Instead of conforming to a specific versioning scheme, the parser is format
//! agnostic: maximal runs of digits become numeric components and everything
//! between them is kept verbatim as separators, so any version string
//! round-trips losslessly. Transformations then operate on the numeric
//! components while the formatting is preserved (or overridden by a template).
//!
//! ## Examples
//!
//! Parse, transform, and render:
//!
//! ```
//! use vershift::prelude::*;
//!
//! let version: Version = "1.2-3".parse().unwrap();
//! let bumped = version.add_and_reset_tail(1, 1);
//! assert_eq!("1.3-0", bumped.to_string());
//! ```
//!
//! Or drive a whole pipeline with a set of operands, the way the CLI does:
//!
//! ```
//! use vershift::prelude::*;
//!
//! let provided: Version = "1.2.3".parse().unwrap();
//! let operands = Operands {
//!     base: Some("1.2".parse().unwrap()),
//!     format: Some("9-8".parse().unwrap()),
//!     ..Operands::default()
//! };
//! assert_eq!(
//!     Outcome::Transformed("1-2-4".to_string()),
//!     operands.evaluate(&provided)
//! );
//! ```
//!
//! ## Important Terms
//!
//! - **Version**: an ordered sequence of numeric components plus the literal
//!   non-numeric text around them. Modeled by the [`Version`] struct.
//!   Component positions are significant: index `i` across two versions means
//!   "the same component" regardless of separators, index 0 being the most
//!   significant.
//! - **Separator**: a maximal run of non-digit characters between (or before,
//!   or after) numeric components.
//! - **Tail reset**: zeroing every component more fine-grained than a
//!   just-changed one. Bumping the minor component of `1.2.3` gives `1.3.0`,
//!   not `1.3.3`.
//!
//! ## Operands
//!
//! The pipeline driver takes one optional [`Version`] operand per step and
//! applies the present ones in a fixed order:
//!
//! | Operand | Effect |
//! |---|---|
//! | `lesser` / `greater` | Conditional mode: compare and answer true/false. |
//! | `base` | Snap to a coarser version, bumping the next component if already aligned. |
//! | `increment` | Add each positive entry at its index, resetting the tail. |
//! | `set` | Overwrite with each positive entry at its index, resetting the tail. |
//! | `minimum` | Raise components to at least the given values; floor only, no reset. |
//! | `format` | Render with this template's separators instead of the original's. |
//! | `pad` | Zero-pad each component to at least the given decimal width. |
#![warn(missing_docs)]

mod error;
mod pipeline;
mod version;

pub use crate::error::VersionError;
pub use crate::pipeline::{Operands, Outcome};
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use vershift::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Operands;
    #[doc(no_inline)]
    pub use crate::Outcome;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
