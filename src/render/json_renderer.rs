use std::io::Write;

use anyhow::Result;

use crate::models::Dataset;
use crate::render::{Renderer, View};

/// Writes each requested view as one JSON document followed by a newline.
pub struct JsonRenderer<W: Write> {
    writer: W,
    pretty: bool
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, dataset: &Dataset, view: View) -> Result<()> {
        let document = view.project(dataset)?;

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }

        writeln!(self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}
