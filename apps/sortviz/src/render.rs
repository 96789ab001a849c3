//! Text rendering of session notices.

use std::io::Write;

use shared::protocol::UiNotice;
use sort_core::RenderSink;

const CELL_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON notice per line, for hosts that draw elsewhere.
    Json,
}

/// Grid position `(column, row)` of display index `index`: columns fill top
/// to bottom, `column_height` values each.
pub fn grid_position(index: usize, column_height: usize) -> (usize, usize) {
    (index / column_height, index % column_height)
}

/// Lays `values` out in columns. Cells listed in `highlight` are bracketed.
pub fn render_grid(values: &[u32], column_height: usize, highlight: Option<(usize, usize)>) -> String {
    let rows = values.len().min(column_height);
    let mut lines = vec![String::new(); rows];

    for (index, value) in values.iter().enumerate() {
        let (_, row) = grid_position(index, column_height);
        let marked = highlight.is_some_and(|(a, b)| index == a || index == b);
        let cell = if marked {
            format!("[{value}]")
        } else {
            format!(" {value} ")
        };
        lines[row].push_str(&format!("{cell:>width$}", width = CELL_WIDTH));
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub struct TerminalRenderer<W> {
    out: W,
    column_height: usize,
    format: OutputFormat,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, column_height: usize, format: OutputFormat) -> Self {
        Self {
            out,
            column_height: column_height.max(1),
            format,
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Free-form host text such as help or parse errors.
    pub fn message(&mut self, text: &str) {
        if self.format == OutputFormat::Json {
            tracing::info!(text, "host message");
            return;
        }
        if let Err(error) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            tracing::error!(%error, "failed to write message");
        }
    }

    fn format_text(&self, notice: &UiNotice) -> String {
        if let Some(message) = notice.user_message() {
            return format!("! {message}\n");
        }
        match notice {
            UiNotice::FullRender { values, .. } => {
                format!("{} values:\n{}", values.len(), render_grid(values, self.column_height, None))
            }
            UiNotice::StepRender { i, j, values, .. } => format!(
                "swap {i} <-> {j}\n{}",
                render_grid(values, self.column_height, Some((*i, *j)))
            ),
            UiNotice::SortComplete { direction } => format!("sorted ({direction:?})\n"),
            UiNotice::EntryScreen => "How many numbers to display?\n".to_string(),
            UiNotice::Busy | UiNotice::InvalidCount { .. } | UiNotice::ValueTooLarge { .. } => {
                String::new()
            }
        }
    }

    fn write_notice(&mut self, notice: &UiNotice) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let text = self.format_text(notice);
                self.out.write_all(text.as_bytes())?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, notice)?;
                self.out.write_all(b"\n")?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn notify(&mut self, notice: UiNotice) {
        if let Err(error) = self.write_notice(&notice) {
            tracing::error!(%error, "failed to render notice");
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
