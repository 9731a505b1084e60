use std::fmt;

use crate::{EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE};

/// A single record of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Writes the row into a `ROW_SIZE` slot.
    ///
    /// Text fields are copied left-packed and NUL padded to their slot width.
    /// The row is expected to be validated already: a field longer than its
    /// column is truncated so that it never spills into the next one.
    pub fn serialize(&self, destination: &mut [u8]) {
        let destination = &mut destination[..ROW_SIZE];
        destination.fill(0);

        destination[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        write_text(
            &mut destination[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE],
            &self.username,
        );
        write_text(
            &mut destination[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE],
            &self.email,
        );
    }

    /// Reads a row back from a `ROW_SIZE` slot.
    pub fn deserialize(source: &[u8]) -> Self {
        let mut id = [0u8; ID_SIZE];
        id.copy_from_slice(&source[ID_OFFSET..ID_OFFSET + ID_SIZE]);

        Self {
            id: u32::from_le_bytes(id),
            username: read_text(&source[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]),
            email: read_text(&source[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

// The last byte of a field is always left as the terminator.
fn write_text(field: &mut [u8], text: &str) {
    let bytes = text.as_bytes();
    let len = bytes.len().min(field.len() - 1);
    field[..len].copy_from_slice(&bytes[..len]);
}

fn read_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
