//! Flatten tracked-change macros out of TeX documents.
//!
//! Rewrites a document by locating invocations of named macros and either
//! deleting the invocation with all its argument groups, or collapsing it
//! down to the inner content of one chosen group. The built-in specification
//! table handles the markup of the easyReview and changes LaTeX packages.
//!
//! ```
//! use texflat::{default_specs, process};
//!
//! let doc = r"Keep \added{this} drop \deleted{that}";
//! assert_eq!(process(doc, &default_specs()).unwrap(), "Keep this drop ");
//! ```

pub mod error;
pub mod processor;
pub mod scan;
pub mod spec;

pub use error::{RewriteError, SpecError};
pub use processor::{process, rewrite};
pub use spec::{Action, MacroSpec, default_specs};
