use std::fmt;
use std::io::Read;
use std::path::Path;

/// Archive kind, classified from the final extension of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    /// One or more xz streams, usually wrapping a tarball.
    Xz,
    /// Gzip-compressed tar stream.
    TarGzip,
    /// Uncompressed tar stream.
    Tar,
    Unsupported,
}

impl ArchiveKind {
    /// Classify by the last extension only, ignoring case.
    ///
    /// `logs.tar.gz` is `TarGzip`, `logs.tar.xz` is `Xz`, `logs.zip` and
    /// extensionless names are `Unsupported`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return Self::Unsupported;
        };

        match ext.to_ascii_lowercase().as_str() {
            "xz" => Self::Xz,
            "gz" => Self::TarGzip,
            "tar" => Self::Tar,
            _ => Self::Unsupported,
        }
    }

    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }

    /// Compression layer that sits in front of the payload.
    pub fn compression(self) -> Option<Compression> {
        match self {
            Self::Xz => Some(Compression::Xz),
            Self::TarGzip => Some(Compression::Gzip),
            Self::Tar => Some(Compression::None),
            Self::Unsupported => None,
        }
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xz => "XZ",
            Self::TarGzip => "TAR GZ",
            Self::Tar => "TAR",
            Self::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Compression codec wrapped around an archive stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Xz,
}

impl Compression {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "identity",
            Self::Gzip => "gzip",
            Self::Xz => "xz",
        }
    }

    /// Wrap `reader` in the streaming decoder for this codec.
    ///
    /// Concatenated gzip members and xz streams decode as one payload.
    /// Returns `None` when the codec was compiled out.
    pub fn decoder<R: Read>(self, reader: R) -> Option<Decoder<R>> {
        match self {
            Self::None => Some(Decoder::Passthrough(reader)),
            Self::Gzip => {
                Some(Decoder::Gzip(Box::new(flate2::read::MultiGzDecoder::new(reader))))
            }
            #[cfg(feature = "xz")]
            Self::Xz => {
                Some(Decoder::Xz(Box::new(xz2::read::XzDecoder::new_multi_decoder(reader))))
            }
            #[cfg(not(feature = "xz"))]
            Self::Xz => None,
        }
    }
}

/// Decoder wrapper over the supported codecs.
pub enum Decoder<R: Read> {
    Passthrough(R),
    Gzip(Box<flate2::read::MultiGzDecoder<R>>),
    #[cfg(feature = "xz")]
    Xz(Box<xz2::read::XzDecoder<R>>),
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Self::Passthrough(r) => r.read(buf),
            Self::Gzip(d) => d.read(buf),
            #[cfg(feature = "xz")]
            Self::Xz(d) => d.read(buf),
        }
    }
}
