use std::io::{self, Read, Seek};

use crate::format::Compression;

const HEADER_LEN: u64 = 512;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
const XZ_MAGIC: [u8; 6] = [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00];

pub fn detect_compression(data: &[u8]) -> Option<Compression> {
    if data.starts_with(&GZIP_MAGIC) {
        Some(Compression::Gzip)
    } else if data.starts_with(&XZ_MAGIC) {
        Some(Compression::Xz)
    } else if is_tar_header(data) {
        Some(Compression::None)
    } else {
        None
    }
}

fn is_tar_header(data: &[u8]) -> bool {
    data.len() >= 512 && data[257..262] == *b"ustar"
}

/// Peek at the leading bytes of `reader`, then rewind it.
pub fn detect_from_reader<R: Read + Seek>(reader: &mut R) -> io::Result<Option<Compression>> {
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    reader.by_ref().take(HEADER_LEN).read_to_end(&mut header)?;
    reader.rewind()?;
    Ok(detect_compression(&header))
}

/// Check that a stream opens with the header `expected` requires.
///
/// Plain tar has no reliable magic (v7 archives lack `ustar`), so it always
/// passes and errors surface later from the tar reader.
pub fn verify_header<R: Read + Seek>(reader: &mut R, expected: Compression) -> io::Result<()> {
    if expected == Compression::None {
        return Ok(());
    }

    match detect_from_reader(reader)? {
        Some(found) if found == expected => Ok(()),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("missing {} header", expected.name()),
        )),
    }
}
