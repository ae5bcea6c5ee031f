//! Decode context shared by every record decoder.

use super::descriptor::RecordSpec;
use super::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use super::header::RecordHeader;
use super::Record;
use crate::common::binary::{BitReader, BitWord, ByteCursor};
use crate::common::error::{PptError, Result};
use crate::ppt::consts::RECORD_HEADER_SIZE;
use crate::ppt::options::DecodeOptions;
use smallvec::SmallVec;
use zerocopy::FromBytes;

/// Cursor over a record stream that tracks the records currently being decoded.
///
/// Every record entered through [`read_record`](Self::read_record) pushes its
/// payload end onto a boundary stack. Field reads are refused past the
/// innermost boundary, and when the payload decode returns the reader checks
/// that the position sits exactly on that boundary.
pub struct RecordReader<'a> {
    cursor: ByteCursor<'a>,
    limits: SmallVec<[usize; 16]>,
    records: usize,
    options: DecodeOptions,
    sink: Option<&'a mut dyn DiagnosticSink>,
}

impl<'a> RecordReader<'a> {
    /// Reader with default options, reporting diagnostics through `log`.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, DecodeOptions::default())
    }

    pub fn with_options(data: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            limits: SmallVec::new(),
            records: 0,
            options,
            sink: None,
        }
    }

    /// Route diagnostics to `sink` instead of the log.
    pub fn with_sink(mut self, sink: &'a mut dyn DiagnosticSink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[inline]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Absolute position in the stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Number of records currently entered.
    #[inline]
    pub fn depth(&self) -> usize {
        self.limits.len()
    }

    /// Number of record headers consumed so far.
    #[inline]
    pub fn records_read(&self) -> usize {
        self.records
    }

    /// End of the innermost entered record, or of the stream at top level.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limits.last().copied().unwrap_or(self.cursor.len())
    }

    #[inline]
    pub fn remaining_in_record(&self) -> usize {
        self.limit().saturating_sub(self.position())
    }

    #[inline]
    pub fn at_record_end(&self) -> bool {
        self.position() >= self.limit()
    }

    /// Jump to an absolute stream offset. Only allowed outside any record.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if !self.limits.is_empty() {
            return Err(PptError::corrupted(
                self.position(),
                "cannot seek while a record is being decoded",
            ));
        }
        if offset > self.cursor.len() {
            return Err(PptError::corrupted(
                offset,
                format!("offset beyond the end of the {}-byte stream", self.cursor.len()),
            ));
        }
        self.cursor.set_position(offset);
        Ok(())
    }

    /// Hand a diagnostic to the injected sink, or to the log when there is none.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match self.sink.as_deref_mut() {
            Some(sink) => sink.report(diagnostic),
            None => LogSink.report(diagnostic),
        }
    }

    fn ensure(&self, count: usize) -> Result<()> {
        let remaining = self.remaining_in_record();
        if count > remaining {
            return Err(PptError::corrupted(
                self.position(),
                format!("read of {count} bytes runs past the end of the record ({remaining} left)"),
            ));
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        self.cursor.read_u8()
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        self.cursor.read_u16()
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.ensure(2)?;
        self.cursor.read_i16()
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        self.cursor.read_u32()
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.ensure(4)?;
        self.cursor.read_i32()
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.ensure(count)?;
        self.cursor.read_bytes(count)
    }

    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.ensure(count)?;
        self.cursor.skip(count)
    }

    pub fn read_bits<T: BitWord>(&mut self) -> Result<BitReader> {
        self.ensure(T::BITS as usize / 8)?;
        self.cursor.read_bits::<T>()
    }

    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        self.ensure(std::mem::size_of::<T>())?;
        self.cursor.read_struct::<T>()
    }

    /// Decode the next header without consuming it. Emits no diagnostic.
    pub fn peek_header(&self) -> Result<RecordHeader> {
        if self.remaining_in_record() < RECORD_HEADER_SIZE {
            return Err(PptError::corrupted(
                self.position(),
                format!(
                    "record header needs {RECORD_HEADER_SIZE} bytes, {} left in the record",
                    self.remaining_in_record()
                ),
            ));
        }
        let mut probe = self.cursor.clone();
        RecordHeader::decode(&mut probe)
    }

    /// `true` if another record follows inside the current one and `spec` selects it.
    pub fn next_is(&self, spec: &RecordSpec) -> bool {
        !self.at_record_end() && self.peek_header().is_ok_and(|header| spec.selects(&header))
    }

    /// Consume a header, counting it against the record ceiling.
    ///
    /// Unknown type codes are reported as a [`Diagnostic::UnknownRecordType`].
    pub fn read_header(&mut self) -> Result<RecordHeader> {
        let offset = self.position();
        let header = self.peek_header()?;
        self.cursor.skip(RECORD_HEADER_SIZE)?;

        self.records += 1;
        if self.records > self.options.max_records {
            return Err(PptError::corrupted(
                offset,
                format!("more than {} records in one stream", self.options.max_records),
            ));
        }
        if !header.is_known() {
            self.report(Diagnostic::UnknownRecordType {
                offset,
                raw_type: header.raw_type,
                length: header.length,
            });
        }
        Ok(header)
    }

    fn payload_end(&self, offset: usize, header: &RecordHeader, name: &str) -> Result<usize> {
        let start = self.position();
        start
            .checked_add(header.length as usize)
            .filter(|&end| end <= self.limit())
            .ok_or_else(|| {
                PptError::corrupted(
                    offset,
                    format!(
                        "{name}: length {:#x} exceeds the {} bytes available",
                        header.length,
                        self.remaining_in_record()
                    ),
                )
            })
    }

    /// Validated decode of one record.
    ///
    /// Reads the header, checks it against `spec`, runs `decode` on the payload
    /// and checks that exactly `header.length` bytes were consumed.
    pub fn read_record<T, F>(&mut self, spec: &RecordSpec, decode: F) -> Result<T>
    where
        F: FnOnce(&mut RecordReader<'a>, &RecordHeader) -> Result<T>,
    {
        let offset = self.position();
        let header = self.read_header()?;
        spec.validate(&header, offset)?;
        self.read_body(offset, &header, spec.name, decode)
    }

    /// Decode the payload of an already consumed header.
    ///
    /// `offset` is where the header started and is used for error reporting.
    pub fn read_body<T, F>(
        &mut self,
        offset: usize,
        header: &RecordHeader,
        name: &str,
        decode: F,
    ) -> Result<T>
    where
        F: FnOnce(&mut RecordReader<'a>, &RecordHeader) -> Result<T>,
    {
        let start = self.position();
        let end = self.payload_end(offset, header, name)?;
        self.check_depth(offset, name)?;

        log::trace!(
            "{name} at {offset:#x}: version {:#x}, instance {:#x}, {} bytes",
            header.version,
            header.instance,
            header.length
        );

        self.limits.push(end);
        let result = decode(self, header);
        self.limits.pop();
        let value = result?;

        let position = self.position();
        if position != end {
            return Err(PptError::corrupted(
                start,
                format!(
                    "{name}: payload decode consumed {} bytes, header declares {}",
                    position.saturating_sub(start),
                    header.length
                ),
            ));
        }
        Ok(value)
    }

    /// Call `decode` until the current record's payload is exhausted.
    pub fn read_until_end<T, F>(&mut self, mut decode: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut RecordReader<'a>) -> Result<T>,
    {
        let mut items = Vec::new();
        while !self.at_record_end() {
            items.push(decode(self)?);
        }
        Ok(items)
    }

    /// Decode `T` only if the next record's type and instance select it.
    pub fn read_optional<T: Record>(&mut self) -> Result<Option<T>> {
        if self.next_is(&T::SPEC) {
            T::decode(self).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Run `decode` only if the next record is selected by `spec`.
    pub fn read_optional_with<T, F>(&mut self, spec: &RecordSpec, decode: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut RecordReader<'a>) -> Result<T>,
    {
        if self.next_is(spec) {
            decode(self).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Run `decode` unless the current record is already exhausted.
    ///
    /// This is how fields added in later file versions are detected: older
    /// writers simply end the record before them.
    pub fn read_trailing<T, F>(&mut self, decode: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut RecordReader<'a>) -> Result<T>,
    {
        if self.at_record_end() {
            Ok(None)
        } else {
            decode(self).map(Some)
        }
    }

    /// Enter the record at the current position, run `decode` on its first
    /// bytes, then rewind to where the record started.
    ///
    /// Nothing is consumed and the record counter is restored, so the same
    /// record can afterwards be decoded for real.
    pub fn peek_into<T, F>(&mut self, spec: &RecordSpec, decode: F) -> Result<T>
    where
        F: FnOnce(&mut RecordReader<'a>) -> Result<T>,
    {
        let position = self.position();
        let records = self.records;
        let depth = self.limits.len();

        let result = self.enter_for_peek(spec, decode);

        self.limits.truncate(depth);
        self.records = records;
        self.cursor.set_position(position);
        result
    }

    fn enter_for_peek<T, F>(&mut self, spec: &RecordSpec, decode: F) -> Result<T>
    where
        F: FnOnce(&mut RecordReader<'a>) -> Result<T>,
    {
        let offset = self.position();
        let header = self.read_header()?;
        spec.validate(&header, offset)?;
        let end = self.payload_end(offset, &header, spec.name)?;
        self.check_depth(offset, spec.name)?;
        self.limits.push(end);
        decode(self)
    }

    fn check_depth(&self, offset: usize, name: &str) -> Result<()> {
        if self.limits.len() >= self.options.max_depth {
            return Err(PptError::corrupted(
                offset,
                format!("{name}: records nested deeper than {}", self.options.max_depth),
            ));
        }
        Ok(())
    }
}
