//! Symmetric markup engine for flashcard editor fields
//!
//!     Users wrap selected text in lightweight symmetric markup (`*text*`,
//!     `~~text~~`); at review time the markup is rendered into styled HTML
//!     spans, or stripped back to plain text. This crate is the engine
//!     behind those three operations. It is a pure lib: it powers the marka
//!     CLI and any host-application glue, but supposes no shell environment
//!     and performs no I/O. Configuration loading lives in marka-config.
//!
//! Architecture
//!
//!     The components, leaves first:
//!
//!     .
//!     ├── error.rs       # ConfigError (fatal) and InvalidMarkup (per call)
//!     ├── style.rs       # Style: validated name/markup/classnames record
//!     ├── pattern.rs     # CompiledStyle: markup -> span pattern + replacements
//!     ├── validate.rs    # span-safety policy (no line-breaks, no inline HTML)
//!     ├── engine.rs      # MarkupEngine: mark / unmark / render
//!     └── registry.rs    # FilterRegistry: named field filters (marked/unmarked)
//!
//!     A caller builds `Style`s (usually through marka-config), compiles
//!     them into a `MarkupEngine` once, then calls `mark`, `unmark` and
//!     `render` with user text. Styles apply in declaration order, each
//!     substitution running over the previous style's output.
//!
//! Core Algorithm
//!
//!     The tricky part is matching a style's delimiter without ever matching
//!     it inside a longer delimiter built from the same character: `*` must
//!     not fire inside `**`. Each style compiles to a pattern whose opening
//!     and closing runs are guarded by negative lookarounds, with a lazy
//!     capture of non-delimiter characters in between; see pattern.rs. The
//!     guards make delimiters of different repeat counts on the same
//!     character mutually exclusive, which also rules out pathological
//!     backtracking by construction.
//!
//! Validation Policy
//!
//!     This crate implements the strict policy: a delimited span must be
//!     plain inline text. Spans containing line-breaks or anything
//!     recognizable as inline HTML (tags, comments, processing
//!     instructions, declarations, entities) are rejected with
//!     `InvalidMarkup` before any substitution runs, so a failing call
//!     never mutates caller-visible state. `*<b>bold</b>*` is invalid
//!     input under this policy.

pub mod engine;
pub mod error;
pub mod pattern;
pub mod registry;
pub mod style;
pub mod validate;

pub use engine::MarkupEngine;
pub use error::{ConfigError, InvalidMarkup};
pub use registry::{FieldFilter, FilterRegistry};
pub use style::{Style, RESERVED_CHARACTERS};
