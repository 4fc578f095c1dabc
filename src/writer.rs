use crate::node::Dataset;
use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Writes datasets as a JSON node array.
pub struct DatasetWriter {
    writer: Box<dyn Write>,
    path: String,
}

impl DatasetWriter {
    /// Creates a writer for the specified file path.
    ///
    /// Brotli compression is enabled when the path ends with `.br`
    /// (e.g. `data.json.br`), using quality level 6.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use rtreefilter::{Dataset, DatasetWriter};
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = DatasetWriter::new("data.json.br")?;
    /// writer.write_dataset(&Dataset::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(DatasetWriter {
            writer,
            path: file_path.to_string(),
        })
    }

    /// Serializes every node (pretty-printed) and flushes the file.
    pub fn write_dataset(&mut self, dataset: &Dataset) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, dataset.nodes())
            .with_context(|| format!("Failed to write dataset: {}", self.path))?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
