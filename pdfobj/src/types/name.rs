use std::{borrow::Borrow, fmt::Display, io::Write};

/// Represents a PDF name object, without its leading `/`.
///
/// The bytes are kept exactly as they appear in the input; `#xx` escapes are
/// neither decoded nor validated. Names are ordered by their byte content.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Name {
    data: Vec<u8>,
}

impl Name {
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Writes the name with its leading `/`.
    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(b"/")?;
        w.write_all(&self.data)
    }
}

impl From<Vec<u8>> for Name {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for Name {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<const N: usize> From<&[u8; N]> for Name {
    fn from(data: &[u8; N]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl From<&str> for Name {
    fn from(data: &str) -> Self {
        Self {
            data: data.as_bytes().to_vec(),
        }
    }
}

impl AsRef<[u8]> for Name {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Borrow<[u8]> for Name {
    fn borrow(&self) -> &[u8] {
        &self.data
    }
}

impl std::ops::Deref for Name {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", String::from_utf8_lossy(&self.data))
    }
}
