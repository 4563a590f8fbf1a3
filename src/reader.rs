//! Batch input: a lazy reader turning a tagged comma-separated stream into
//! one [`Graph`] per logical record.
//!
//! Line kinds, dispatched on the first field:
//! * `c` — record separator; flushes the graph under construction if it has
//!   any content, otherwise a no-op (tolerates a leading separator).
//! * `v, id1, id2, ...` — replaces the current vertex sequence.
//! * `e, src, dst` — appends one undirected edge.
//! * blank lines are skipped; any other tag is silently ignored.
//!
//! A non-empty accumulator at end of stream is emitted as the final record,
//! so no trailing separator is required. Malformed integer fields are fatal
//! to the whole batch.
use std::fs::File;
use std::io::Read;
use std::mem;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use log::debug;
use thiserror::Error;

use crate::graph::{Graph, VertexId};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid integer field {value:?} on line {line}")]
    InvalidInteger { line: u64, value: String },
    #[error("edge on line {line} is missing an endpoint")]
    MissingEdgeEndpoint { line: u64 },
}

/// Lazy, non-restartable sequence of graph records in file order.
pub struct GraphBatchReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    current: Graph,
    done: bool,
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

impl GraphBatchReader<File> {
    /// Opens the named input file. Fails up front if the file does not exist
    /// or cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReadError> {
        Ok(Self::wrap(builder().from_path(path)?))
    }
}

impl<R: Read> GraphBatchReader<R> {
    pub fn new(reader: R) -> Self {
        Self::wrap(builder().from_reader(reader))
    }

    fn wrap(reader: csv::Reader<R>) -> Self {
        Self {
            records: reader.into_records(),
            current: Graph::empty(),
            done: false,
        }
    }

    /// Takes the accumulated graph and resets the accumulator.
    fn flush(&mut self) -> Graph {
        mem::take(&mut self.current)
    }

    fn consume(&mut self, record: &StringRecord) -> Result<Option<Graph>, ReadError> {
        match record.get(0) {
            Some("c") => {
                if !self.current.is_empty() {
                    return Ok(Some(self.flush()));
                }
            }
            Some("v") => {
                let mut vertices = Vec::with_capacity(record.len().saturating_sub(1));
                for field in record.iter().skip(1) {
                    vertices.push(parse_id(record, field)?);
                }
                self.current.vertices = vertices;
            }
            Some("e") => {
                let src = edge_endpoint(record, 1)?;
                let dst = edge_endpoint(record, 2)?;
                self.current.edges.push((src, dst));
            }
            Some(tag) => {
                debug!("ignoring unrecognized tag {tag:?} on line {}", line_of(record));
            }
            None => {}
        }
        Ok(None)
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default()
}

fn parse_id(record: &StringRecord, field: &str) -> Result<VertexId, ReadError> {
    field.parse().map_err(|_| ReadError::InvalidInteger {
        line: line_of(record),
        value: field.to_owned(),
    })
}

fn edge_endpoint(record: &StringRecord, index: usize) -> Result<VertexId, ReadError> {
    let field = record
        .get(index)
        .filter(|field| !field.is_empty())
        .ok_or(ReadError::MissingEdgeEndpoint {
            line: line_of(record),
        })?;
    parse_id(record, field)
}

impl<R: Read> Iterator for GraphBatchReader<R> {
    type Item = Result<Graph, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.records.next() {
                Some(Ok(record)) => {
                    // The csv parser already drops fully blank lines; this
                    // guards against records of empty fields only.
                    if record.iter().all(|field| field.is_empty()) {
                        continue;
                    }
                    match self.consume(&record) {
                        Ok(Some(graph)) => return Some(Ok(graph)),
                        Ok(None) => continue,
                        Err(err) => {
                            self.done = true;
                            return Some(Err(err));
                        }
                    }
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
                None => {
                    self.done = true;
                    if self.current.is_empty() {
                        return None;
                    }
                    return Some(Ok(self.flush()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(input: &str) -> Vec<Graph> {
        GraphBatchReader::new(input.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn splits_records_on_separator() {
        let graphs = read_all("c\nv,1,2,3\ne,1,2\ne,2,3\nc\nv,4,5\ne,4,5\n");
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].vertices, vec![1, 2, 3]);
        assert_eq!(graphs[0].edges, vec![(1, 2), (2, 3)]);
        assert_eq!(graphs[1].vertices, vec![4, 5]);
        assert_eq!(graphs[1].edges, vec![(4, 5)]);
    }

    #[test]
    fn emits_trailing_record_without_separator() {
        let graphs = read_all("v,9\n");
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].vertices, vec![9]);
        assert!(graphs[0].edges.is_empty());
    }

    #[test]
    fn leading_separator_is_a_noop() {
        let graphs = read_all("c,header junk\nc\nv,1\n");
        assert_eq!(graphs.len(), 1);
    }

    #[test]
    fn empty_record_between_separators_is_skipped() {
        let graphs = read_all("c\nc\nc\nv,1\nc\nc\n");
        assert_eq!(graphs.len(), 1);
    }

    #[test]
    fn v_line_replaces_previous_vertices() {
        let graphs = read_all("v,1,2\nv,7,8,9\n");
        assert_eq!(graphs[0].vertices, vec![7, 8, 9]);
    }

    #[test]
    fn unknown_tags_and_blank_lines_are_ignored() {
        let graphs = read_all("x,1,2\n\nv,1\n\nw\ne,1,1\n");
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].vertices, vec![1]);
        assert_eq!(graphs[0].edges, vec![(1, 1)]);
    }

    #[test]
    fn edge_only_record_is_emitted() {
        let graphs = read_all("e,1,2\n");
        assert_eq!(graphs.len(), 1);
        assert!(graphs[0].vertices.is_empty());
        assert_eq!(graphs[0].edges, vec![(1, 2)]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(read_all("").is_empty());
    }

    #[test]
    fn malformed_vertex_field_aborts_the_batch() {
        let mut reader = GraphBatchReader::new("v,1,two,3\n".as_bytes());
        match reader.next() {
            Some(Err(ReadError::InvalidInteger { line, value })) => {
                assert_eq!(line, 1);
                assert_eq!(value, "two");
            }
            other => panic!("expected InvalidInteger, got {other:?}"),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn edge_with_missing_endpoint_aborts_the_batch() {
        let mut reader = GraphBatchReader::new("v,1,2\ne,1\n".as_bytes());
        match reader.next() {
            Some(Err(ReadError::MissingEdgeEndpoint { line })) => assert_eq!(line, 2),
            other => panic!("expected MissingEdgeEndpoint, got {other:?}"),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn fields_are_trimmed_before_parsing() {
        let graphs = read_all("v, 1 , 2\ne, 1, 2\n");
        assert_eq!(graphs[0].vertices, vec![1, 2]);
        assert_eq!(graphs[0].edges, vec![(1, 2)]);
    }
}
