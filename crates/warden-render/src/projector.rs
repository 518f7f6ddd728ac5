//! Canonical text rendering.

use std::io;
use std::string::FromUtf8Error;

use serde::Serialize;
use thiserror::Error;

use crate::format::{AuditFormatter, Layout};
use crate::model::Project;

/// Errors from rendering a projection.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Projection is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Renders decisions, traces and reports as canonical JSON text.
///
/// Rendering is a pure function of the value and the layout; the same input
/// always yields byte-identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projector {
    layout: Layout,
}

impl Projector {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn pretty() -> Self {
        Self::new(Layout::Pretty)
    }

    pub fn compact() -> Self {
        Self::new(Layout::Compact)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Renders `value` to a string.
    pub fn render<T: Project + ?Sized>(&self, value: &T) -> Result<String> {
        let mut buf = Vec::with_capacity(256);
        self.write(&mut buf, value)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Renders `value` into `writer`.
    pub fn write<W, T>(&self, writer: W, value: &T) -> Result<()>
    where
        W: io::Write,
        T: Project + ?Sized,
    {
        let view = value.view();
        match self.layout {
            Layout::Pretty => serialize(writer, AuditFormatter::pretty(), &view),
            Layout::Compact => serialize(writer, AuditFormatter::compact(), &view),
        }
    }
}

fn serialize<W, F, S>(writer: W, formatter: AuditFormatter<F>, value: &S) -> Result<()>
where
    W: io::Write,
    F: serde_json::ser::Formatter,
    S: Serialize,
{
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

/// Renders `value` with the default (pretty) layout.
pub fn to_json<T: Project + ?Sized>(value: &T) -> Result<String> {
    Projector::default().render(value)
}
