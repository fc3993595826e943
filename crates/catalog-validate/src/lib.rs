//! Catalog worksheet validation.
//!
//! A [`RuleRegistry`] maps column names to [`Rule`]s and adds row-level
//! location rules; a [`ValidationEngine`] applies it to rows in order and
//! returns a [`ValidationReport`]. Failed checks are data ([`Outcome`]), not
//! errors: a [`RuleError`] only ever becomes a Hard outcome on one cell.
//!
//! [`Outcome`]: catalog_model::Outcome

pub mod engine;
pub mod error;
pub mod options;
pub mod registry;
pub mod report;
pub mod rules;

pub use engine::ValidationEngine;
pub use error::{Result, RuleError};
pub use options::{DateCheck, SequenceBaseline, ValidationOptions};
pub use registry::RuleRegistry;
pub use report::{
    ColumnSummary, Marking, MarkingSink, RecordingSink, ValidationReport, apply_markings, project,
};
pub use rules::Rule;
