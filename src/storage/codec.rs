//! The persisted container format.
//!
//! ```text
//! container     := small_section large_section
//! small_section := count:i32  small_entry*count
//! large_section := count:i32  large_entry*count
//! small_entry   := key_len:u8  key_bytes[key_len]  list_len:u8   doc_id:u16 * list_len
//! large_entry   := key_len:u8  key_bytes[key_len]  list_len:u16  doc_id:u16 * list_len
//! ```
//!
//! All integers are big-endian. A term goes to the small section iff its posting list
//! has fewer than [`LARGE_POSTINGS_THRESHOLD`] entries. Keys are UTF-8.
//!
//! Within a section, entries are written in ascending term order, so equal indexes
//! from the builder encode to identical bytes. The decoder accepts any entry order.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::document::DocId;
use crate::error::{IndexError, Result};
use crate::index::InvertedIndex;
use crate::storage::structured::{StructReader, StructWriter};

/// Posting-list length from which a term is stored in the large section.
pub const LARGE_POSTINGS_THRESHOLD: usize = 255;

/// Longest term, in UTF-8 bytes, that fits the one-byte key length.
pub const MAX_TERM_BYTES: usize = u8::MAX as usize;

/// Longest posting list that fits the two-byte list length.
pub const MAX_POSTINGS: usize = u16::MAX as usize;

/// Which section an entry belongs to, and so how wide its length prefix is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// One-byte list length.
    Small,
    /// Two-byte list length.
    Large,
}

impl EntryKind {
    /// Section for a posting list of `len` entries.
    pub fn classify(len: usize) -> Self {
        if len < LARGE_POSTINGS_THRESHOLD {
            EntryKind::Small
        } else {
            EntryKind::Large
        }
    }

    /// Smallest possible encoded entry: key length, empty key, list length.
    fn min_entry_len(self) -> usize {
        match self {
            EntryKind::Small => 2,
            EntryKind::Large => 3,
        }
    }

    fn write_list_len<W: Write>(self, writer: &mut StructWriter<W>, len: usize) -> Result<()> {
        match self {
            EntryKind::Small => writer.write_u8(len as u8),
            EntryKind::Large => writer.write_u16(len as u16),
        }
    }

    fn read_list_len(self, reader: &mut StructReader<'_>) -> Result<usize> {
        let len = match self {
            EntryKind::Small => reader.read_u8()? as usize,
            EntryKind::Large => reader.read_u16()? as usize,
        };
        if len == 0 {
            return Err(IndexError::format(format!(
                "empty posting list at offset {}",
                reader.position()
            )));
        }
        if EntryKind::classify(len) != self {
            return Err(IndexError::format(format!(
                "posting list of {len} entries in the {:?} section at offset {}",
                self,
                reader.position()
            )));
        }
        Ok(len)
    }
}

/// A validated entry ready to be written.
struct Entry<'a> {
    term: &'a str,
    doc_ids: Vec<u16>,
}

/// Check every term and id against the field widths, then split by section.
fn partition(index: &InvertedIndex) -> Result<(Vec<Entry<'_>>, Vec<Entry<'_>>)> {
    let mut small = Vec::new();
    let mut large = Vec::new();

    for (term, postings) in index.iter() {
        if term.len() > MAX_TERM_BYTES {
            return Err(IndexError::encoding(format!(
                "term of {} bytes exceeds the {MAX_TERM_BYTES}-byte limit",
                term.len()
            )));
        }
        if postings.len() > MAX_POSTINGS {
            return Err(IndexError::encoding(format!(
                "term '{term}' has {} postings, more than {MAX_POSTINGS}",
                postings.len()
            )));
        }
        let doc_ids = postings
            .iter()
            .map(|&id| encode_doc_id(term, id))
            .collect::<Result<Vec<u16>>>()?;

        let entry = Entry { term, doc_ids };
        match EntryKind::classify(postings.len()) {
            EntryKind::Small => small.push(entry),
            EntryKind::Large => large.push(entry),
        }
    }

    small.sort_unstable_by(|a, b| a.term.cmp(b.term));
    large.sort_unstable_by(|a, b| a.term.cmp(b.term));
    Ok((small, large))
}

fn encode_doc_id(term: &str, id: DocId) -> Result<u16> {
    u16::try_from(id).map_err(|_| {
        IndexError::encoding(format!(
            "document id {id} for term '{term}' does not fit in 16 bits"
        ))
    })
}

fn write_section<W: Write>(
    writer: &mut StructWriter<W>,
    kind: EntryKind,
    entries: &[Entry<'_>],
) -> Result<()> {
    let count = i32::try_from(entries.len()).map_err(|_| {
        IndexError::encoding(format!("{} terms do not fit the section count", entries.len()))
    })?;
    writer.write_i32(count)?;

    for entry in entries {
        writer.write_u8(entry.term.len() as u8)?;
        writer.write_raw(entry.term.as_bytes())?;
        kind.write_list_len(writer, entry.doc_ids.len())?;
        for &id in &entry.doc_ids {
            writer.write_u16(id)?;
        }
    }
    Ok(())
}

fn write_container<W: Write>(
    writer: W,
    small: &[Entry<'_>],
    large: &[Entry<'_>],
) -> Result<(u64, W)> {
    debug!(
        "dumping {} small and {} large entries",
        small.len(),
        large.len()
    );

    let mut writer = StructWriter::new(writer);
    write_section(&mut writer, EntryKind::Small, small)?;
    write_section(&mut writer, EntryKind::Large, large)?;

    let written = writer.position();
    Ok((written, writer.finish()?))
}

/// Write the index to `writer`, returning the number of bytes written.
///
/// Every term and id is checked before the first byte goes out, so an
/// [`IndexError::Encoding`] leaves the destination untouched.
pub fn dump<W: Write>(index: &InvertedIndex, writer: W) -> Result<u64> {
    let (small, large) = partition(index)?;
    let (written, _) = write_container(writer, &small, &large)?;
    Ok(written)
}

/// Encode the index into a byte vector.
pub fn encode(index: &InvertedIndex) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    dump(index, &mut bytes)?;
    Ok(bytes)
}

/// Write the index to a file, replacing any existing content.
///
/// The file is only truncated once the index is known to be encodable. It is not
/// replaced atomically; an I/O failure mid-write leaves it partial.
pub fn dump_to_path<P: AsRef<Path>>(index: &InvertedIndex, path: P) -> Result<u64> {
    let path = path.as_ref();
    info!("dump inverted index to {}", path.display());

    let (small, large) = partition(index)?;
    let file = BufWriter::new(File::create(path)?);
    let (written, file) = write_container(file, &small, &large)?;
    file.into_inner().map_err(|e| e.into_error())?.sync_all()?;
    Ok(written)
}

fn read_section(
    reader: &mut StructReader<'_>,
    kind: EntryKind,
    index: &mut InvertedIndex,
) -> Result<()> {
    let count = reader.read_i32()?;
    let count = usize::try_from(count).map_err(|_| {
        IndexError::format(format!("negative {kind:?} section count {count}"))
    })?;
    if count.saturating_mul(kind.min_entry_len()) > reader.remaining() {
        return Err(IndexError::format(format!(
            "{kind:?} section declares {count} entries but only {} bytes remain",
            reader.remaining()
        )));
    }

    for _ in 0..count {
        let key_len = reader.read_u8()? as usize;
        let offset = reader.position();
        let term = std::str::from_utf8(reader.read_raw(key_len)?).map_err(|e| {
            IndexError::format(format!("term at offset {offset} is not valid UTF-8: {e}"))
        })?;

        let list_len = kind.read_list_len(reader)?;
        let postings: Vec<DocId> = reader
            .read_u16_vec(list_len)?
            .into_iter()
            .map(DocId::from)
            .collect();

        if index.insert(term, postings)?.is_some() {
            return Err(IndexError::format(format!(
                "term '{term}' is stored more than once"
            )));
        }
    }
    Ok(())
}

/// Decode a container held in memory.
///
/// The whole slice must be consumed; trailing bytes are a format error, as is a term
/// that appears twice anywhere in the container.
pub fn decode(bytes: &[u8]) -> Result<InvertedIndex> {
    let mut reader = StructReader::new(bytes);
    let mut index = InvertedIndex::new();

    read_section(&mut reader, EntryKind::Small, &mut index)?;
    read_section(&mut reader, EntryKind::Large, &mut index)?;

    if !reader.is_at_end() {
        return Err(IndexError::format(format!(
            "{} unexpected bytes after the large section",
            reader.remaining()
        )));
    }

    debug!("decoded {} terms from {} bytes", index.len(), bytes.len());
    Ok(index)
}

/// Read and decode a container from `reader`.
pub fn load<R: Read>(mut reader: R) -> Result<InvertedIndex> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Read and decode a container from a file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<InvertedIndex> {
    let path = path.as_ref();
    info!("load inverted index {}", path.display());
    load(File::open(path)?)
}
