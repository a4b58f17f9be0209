use crate::core::{ReportEntry, ReportSink};
use crate::utils::error::Result;
use serde::Deserialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Writes a report as plain text or JSON.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // 每個性別一個區塊，寵物名稱前加 "- "
    fn write_text(&mut self, report: &[ReportEntry]) -> Result<()> {
        for entry in report {
            writeln!(self.out)?;
            writeln!(self.out, "{}", entry.gender)?;
            writeln!(self.out)?;

            for pet in &entry.pets {
                writeln!(self.out, "- {}", pet.name)?;
            }

            writeln!(self.out, "\n")?;
        }
        Ok(())
    }

    fn write_json(&mut self, report: &[ReportEntry]) -> Result<()> {
        // 先序列化再寫出，寫入失敗才會是 IoError
        let json = serde_json::to_vec_pretty(report)?;
        self.out.write_all(&json)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ReportSink for ConsoleRenderer<W> {
    fn render(&mut self, report: &[ReportEntry]) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(report)?,
            OutputFormat::Json => self.write_json(report)?,
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pet;
    use crate::utils::error::PetReportError;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn sample_report() -> Vec<ReportEntry> {
        vec![
            ReportEntry {
                gender: "Female".to_string(),
                pets: vec![Pet::new("Garfield", "Cat"), Pet::new("Tabby", "Cat")],
            },
            ReportEntry {
                gender: "Male".to_string(),
                pets: vec![],
            },
        ]
    }

    fn render_to_string(format: OutputFormat, report: &[ReportEntry]) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new(), format);
        renderer.render(report).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_text_layout() {
        let output = render_to_string(OutputFormat::Text, &sample_report());

        assert_eq!(
            output,
            "\nFemale\n\n- Garfield\n- Tabby\n\n\n\nMale\n\n\n\n"
        );
    }

    #[test]
    fn test_json_write_failure_is_io_error() {
        let mut renderer = ConsoleRenderer::new(ClosedPipe, OutputFormat::Json);

        let err = renderer.render(&sample_report()).unwrap_err();

        assert!(matches!(err, PetReportError::IoError(_)));
    }

    #[test]
    fn test_text_write_failure_is_io_error() {
        let mut renderer = ConsoleRenderer::new(ClosedPipe, OutputFormat::Text);

        let err = renderer.render(&sample_report()).unwrap_err();

        assert!(matches!(err, PetReportError::IoError(_)));
    }

    #[test]
    fn test_text_empty_report_renders_nothing() {
        assert_eq!(render_to_string(OutputFormat::Text, &[]), "");
    }

    #[test]
    fn test_json_layout() {
        let output = render_to_string(OutputFormat::Json, &sample_report());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {"gender": "Female", "pets": [
                    {"name": "Garfield", "type": "Cat"},
                    {"name": "Tabby", "type": "Cat"}
                ]},
                {"gender": "Male", "pets": []}
            ])
        );
    }

    #[test]
    fn test_output_format_from_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }

        let parsed: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
    }
}
