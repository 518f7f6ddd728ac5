//! # warden-render: Canonical Projections
//!
//! Maps decisions, policy steps, evaluation results and compliance reports to
//! a fixed JSON text form for audit logs and reporting.
//!
//! Field order is part of the format. String fields escape exactly five
//! characters (`"`, `\`, line feed, carriage return, tab); every other
//! character is written unchanged. Output that contains no other control
//! characters is standard JSON.
//!
//! ## Examples
//!
//! ```
//! use warden_render::Projector;
//! use warden_types::Decision;
//!
//! let decision = Decision::deny("default", "No policy explicitly granted access.");
//! let text = Projector::compact().render(&decision).unwrap();
//! assert_eq!(
//!     text,
//!     r#"{"effect":"Deny","policy_name":"default","reason":"No policy explicitly granted access."}"#
//! );
//! ```

pub mod escape;
pub mod format;
pub mod model;
pub mod projector;

pub use escape::{RESERVED, UnescapeError, escape, unescape};
pub use format::{AuditFormatter, Layout};
pub use model::{DecisionView, EvaluationView, Project, ReportView, StepView, TraceView};
pub use projector::{Projector, RenderError, Result, to_json};
