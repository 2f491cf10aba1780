//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `state`: per-run scores and data-table marks keyed by node id
//! - `pruning`: the scoring walk and ancestor score propagation
//! - `tables`: data-table detection
//! - `cleaning`: conditional cleaning of the selected content
//! - `pipeline`: stage orchestration and post-processing
//!
//! # Usage
//!
//! ```rust,ignore
//! use rs_readscrub::extractor::pipeline;
//!
//! let doc = dom::parse(html);
//! html_processing::prep_document(&doc);
//! if let Some(grabbed) = pipeline::grab_article(&doc, &options, &title) {
//!     pipeline::post_process(&grabbed.content, &base, &options);
//! }
//! ```

pub mod cleaning;
pub mod pipeline;
pub mod pruning;
pub mod state;
pub mod tables;

pub use pipeline::{grab_article, post_process, Grabbed};
pub use state::{NodeMeta, ScoreStore};
