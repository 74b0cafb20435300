use std::collections::BTreeSet;
use std::io::Write;

use serde::Serialize;
use textsplit_core::PipelineOutput;
use textsplit_splitter::Chunk;

const SEPARATOR: &str = "--------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Chunk count followed by the first two and last two chunks.
    Summary,
    /// One JSON object per chunk.
    Jsonl,
}

#[derive(Serialize)]
struct ChunkRecord<'a> {
    document: usize,
    source: Option<&'a str>,
    start: usize,
    end: usize,
    content: &'a str,
}

/// Positions shown by the summary: first, second, second-to-last, last.
fn preview_positions(len: usize) -> BTreeSet<usize> {
    [Some(0), Some(1), len.checked_sub(2), len.checked_sub(1)]
        .into_iter()
        .flatten()
        .filter(|&i| i < len)
        .collect()
}

pub fn write_summary<W: Write>(out: &mut W, chunks: &[Chunk]) -> std::io::Result<()> {
    writeln!(out, "{}", chunks.len())?;
    for (n, i) in preview_positions(chunks.len()).into_iter().enumerate() {
        if n > 0 {
            writeln!(out, "{SEPARATOR}")?;
        }
        writeln!(out, "{}", chunks[i].content)?;
    }
    Ok(())
}

pub fn write_jsonl<W: Write>(out: &mut W, output: &PipelineOutput) -> anyhow::Result<()> {
    for chunk in &output.chunks {
        let record = ChunkRecord {
            document: chunk.document_index,
            source: output.source_of(chunk),
            start: chunk.span.start,
            end: chunk.span.end,
            content: &chunk.content,
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    Ok(())
}
