//! Tab-separated text output for plotting.
//!
//! [`TableWriter`] renders each record as one line in the order
//! `t, x[0..D], v[0..D], T, V, T+V`, the layout gnuplot-style tools
//! expect (`plot 'out' u 2:3 w linesp`), preceded by a single
//! `#`-prefixed header line naming the columns.

use std::io::{self, Write};

use crate::reporting::sink::{StateRecord, StateSink};
use crate::simulation::error::SimError;

/// Writes records as tab-separated lines to any [`io::Write`] sink.
pub struct TableWriter<W: Write> {
    out: W,
    header: bool,       // emit a column-name line before the first record
    wrote_header: bool, // header already written for this run
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header: true,
            wrote_header: false,
        }
    }

    /// Suppress the column-name header line.
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self, d: usize) -> io::Result<()> {
        write!(self.out, "#\tt")?;
        for i in 0..d {
            write!(self.out, "\tx[{i}]")?;
        }
        for i in 0..d {
            write!(self.out, "\tv[{i}]")?;
        }
        writeln!(self.out, "\tT\tV\tT+V")
    }

    fn write_record<const D: usize>(&mut self, rec: &StateRecord<D>) -> io::Result<()> {
        write!(self.out, "{}", rec.t)?;
        for xi in rec.x.iter() {
            write!(self.out, "\t{xi}")?;
        }
        for vi in rec.v.iter() {
            write!(self.out, "\t{vi}")?;
        }
        writeln!(
            self.out,
            "\t{}\t{}\t{}",
            rec.kinetic,
            rec.potential,
            rec.total()
        )
    }
}

impl<const D: usize, W: Write> StateSink<D> for TableWriter<W> {
    fn emit(&mut self, rec: &StateRecord<D>) -> Result<(), SimError> {
        if self.header && !self.wrote_header {
            self.write_header(D)?;
            self.wrote_header = true;
        }
        self.write_record(rec)?;
        Ok(())
    }
}
