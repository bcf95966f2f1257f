//! loadmail: turn load-test CSV results into an HTML summary and email it.
//!
//! Two strictly sequential stages that share nothing but a file on disk:
//!
//! 1. [`reporting::generate`] reads a CSV file and writes an HTML report.
//! 2. [`notify::Notifier`] reads that report and sends it to every configured
//!    recipient in one SMTP session, using a [`config::RecipientConfig`]
//!    resolved once by [`config::ConfigLoader`].

pub mod config;
pub mod core;
pub mod notify;
pub mod reporting;
pub mod ui;

pub use crate::config::{ConfigLoader, EnvOverrides, RecipientConfig};
pub use crate::core::{LoadMailError, MetricRow, MetricsSnapshot, RenderedReport, Result, SendError};
pub use crate::notify::{Notifier, SendReport};
pub use crate::reporting::{GenerateOptions, ReportGenerator, generate};
