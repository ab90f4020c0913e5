use crate::core::alphabet::Alphabet;
use crate::encoders::bits::BYTES_PER_GROUP;
use crate::encoders::encode::{encode_into, encode_tail, encoded_len};
use std::io::{self, Read, Write};

use super::CHUNK_SIZE;

/// Streaming encoder for processing large amounts of data efficiently.
///
/// Bytes written to the encoder are emitted as soon as they complete a
/// 3-byte group; at most 2 bytes are held back between calls. The tail and
/// its padding are only produced once the caller signals end of input with
/// [`finish`](Self::finish) (or [`encode`](Self::encode), which drains a
/// reader and then finishes). Dropping the encoder without finishing loses
/// the held-back bytes.
pub struct StreamingEncoder<'a, W: Write> {
    alphabet: &'a Alphabet,
    writer: W,
    pending: [u8; 2],
    pending_len: usize,
    out: String,
    bytes_in: u64,
    finished: bool,
}

impl<'a, W: Write> StreamingEncoder<'a, W> {
    /// Creates a new streaming encoder.
    ///
    /// # Arguments
    ///
    /// * `alphabet` - The alphabet to encode with
    /// * `writer` - The destination for encoded output
    pub fn new(alphabet: &'a Alphabet, writer: W) -> Self {
        StreamingEncoder {
            alphabet,
            writer,
            pending: [0; 2],
            pending_len: 0,
            out: String::new(),
            bytes_in: 0,
            finished: false,
        }
    }

    /// Encodes everything `reader` yields, then finishes the output.
    ///
    /// Returns the number of input bytes consumed by this call.
    pub fn encode<R: Read>(&mut self, reader: &mut R) -> io::Result<u64> {
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut total = 0u64;

        loop {
            let bytes_read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.write_all(&buffer[..bytes_read])?;
            total += bytes_read as u64;
        }

        self.finish_tail()?;
        Ok(total)
    }

    /// Emits the final group with its padding and returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.finish_tail()?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Number of bytes held back waiting for a complete group.
    pub fn pending(&self) -> usize {
        self.pending_len
    }

    fn finish_tail(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }

        self.out.clear();
        encode_tail(&self.pending[..self.pending_len], self.alphabet, &mut self.out);
        self.writer.write_all(self.out.as_bytes())?;
        self.pending_len = 0;
        self.finished = true;

        log::debug!(
            "streaming encode finished: {} bytes in, {} characters out",
            self.bytes_in,
            encoded_len(self.bytes_in as usize)
        );
        Ok(())
    }
}

impl<W: Write> Write for StreamingEncoder<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.finished {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "write after the encoder was finished",
            ));
        }

        let mut data = buf;
        self.out.clear();

        if self.pending_len > 0 {
            let need = BYTES_PER_GROUP - self.pending_len;
            if data.len() < need {
                self.pending[self.pending_len..self.pending_len + data.len()]
                    .copy_from_slice(data);
                self.pending_len += data.len();
                self.bytes_in += buf.len() as u64;
                return Ok(buf.len());
            }

            let mut group = [0u8; 3];
            group[..self.pending_len].copy_from_slice(&self.pending[..self.pending_len]);
            group[self.pending_len..].copy_from_slice(&data[..need]);
            encode_into(&group, self.alphabet, &mut self.out);
            data = &data[need..];
            self.pending_len = 0;
        }

        let full = data.len() / BYTES_PER_GROUP * BYTES_PER_GROUP;
        encode_into(&data[..full], self.alphabet, &mut self.out);

        let leftover = &data[full..];
        self.pending[..leftover.len()].copy_from_slice(leftover);
        self.pending_len = leftover.len();

        self.writer.write_all(self.out.as_bytes())?;
        self.bytes_in += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
