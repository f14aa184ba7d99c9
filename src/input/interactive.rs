use crate::{DenseGraph, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Interactive graph builder over an injectable line source
///
/// Prompts are written to `output` and replies read from `input`, so the
/// builder works equally over locked stdio or in-memory buffers in tests.
/// Vertex indices are entered 0-based; an empty `from` or `to` line finishes
/// edge entry.
pub struct InteractiveBuilder<R, W> {
    input: R,
    output: W,
}

impl<R, W> InteractiveBuilder<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        InteractiveBuilder { input, output }
    }

    /// Reads one line after showing `prompt`; `None` on end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Reads and parses a value, re-prompting until one parses
    fn read_parsed<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let line = match self.read_line(prompt)? {
                Some(line) => line,
                None => {
                    return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into())
                }
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "invalid input")?,
            }
        }
    }

    /// Reads a vertex index at most `max`; empty line or EOF ends input
    fn read_index_or_end(&mut self, prompt: &str, max: usize) -> Result<Option<usize>> {
        loop {
            let line = match self.read_line(prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };
            if line.is_empty() {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(index) if index <= max => return Ok(Some(index)),
                Ok(_) => writeln!(self.output, "out of range")?,
                Err(_) => writeln!(self.output, "invalid number")?,
            }
        }
    }

    /// Prompts for the graph size and then for edges until an empty line
    ///
    /// Edges are stored exactly as entered (directed); enter both directions
    /// for an undirected graph. Rejected edges (negative weight) are reported
    /// and re-entered.
    pub fn build(&mut self) -> Result<DenseGraph<f64>> {
        let size: usize = self.read_parsed("size: ")?;
        let mut graph = DenseGraph::new(size);
        if size == 0 {
            return Ok(graph);
        }

        loop {
            let from = match self.read_index_or_end("from: ", size - 1)? {
                Some(index) => index,
                None => return Ok(graph),
            };
            let to = match self.read_index_or_end("to: ", size - 1)? {
                Some(index) => index,
                None => return Ok(graph),
            };
            let weight: f64 = self.read_parsed("weight: ")?;

            if let Err(err) = graph.set_edge(from, to, weight) {
                writeln!(self.output, "{}", err)?;
            }
        }
    }

    /// Prompts for the start vertex of a solve, bounded by `size`
    pub fn read_start(&mut self, size: usize) -> Result<usize> {
        loop {
            let start: usize = self.read_parsed("start from: ")?;
            if start < size {
                return Ok(start);
            }
            writeln!(self.output, "out of range")?;
        }
    }
}
