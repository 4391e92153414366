use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Serializes advisory results as JSON to stdout or a file
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn to_string<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    pub fn write_to<T: Serialize, W: Write>(&self, value: &T, mut writer: W) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write to `output`, or stdout when no path is given
    pub fn write<T: Serialize>(&self, value: &T, output: Option<&Path>) -> Result<()> {
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                debug!(path = %path.display(), "writing JSON output");
                self.write_to(value, BufWriter::new(File::create(path)?))
            }
            None => self.write_to(value, io::stdout().lock()),
        }
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
