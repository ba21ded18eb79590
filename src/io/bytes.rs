//! # Byte conversion
//!
//! Magnitudes are written big-endian, most significant byte first. Signed values are preceded by
//! a single sign byte: `0` for non-negative and `1` for negative values.
use crate::data::number_types::integer::big::{SignedBigInteger, UnsignedBigInteger, Word};

const BYTES_IN_WORD: usize = std::mem::size_of::<Word>();

impl UnsignedBigInteger {
    /// Big-endian bytes of the value.
    ///
    /// # Arguments
    ///
    /// * `remove_leading_zeros`: Whether to strip the zero bytes that pad the most significant
    /// word. Without stripping, the output is `trimmed_length() * 4` bytes long.
    ///
    /// # Return value
    ///
    /// The bytes. Zero has no significant words and is exported as no bytes at all, and so is an
    /// invalid value: check `is_invalid` first.
    pub fn export_data(&self, remove_leading_zeros: bool) -> Vec<u8> {
        if self.is_invalid() {
            return Vec::new();
        }

        let mut bytes = self.trimmed_words().iter()
            .rev()
            .flat_map(|word| word.to_be_bytes())
            .collect::<Vec<_>>();
        if remove_leading_zeros {
            let leading_zeros = bytes.iter().take_while(|&&byte| byte == 0).count();
            bytes.drain(..leading_zeros);
        }

        bytes
    }

    /// Read big-endian bytes.
    ///
    /// Any byte sequence is a magnitude, the empty sequence and sequences of zeros are zero.
    pub fn import_data(bytes: &[u8]) -> Self {
        let words = bytes.rchunks(BYTES_IN_WORD)
            .map(|chunk| chunk.iter().fold(0, |word: Word, &byte| word << 8 | byte as Word))
            .collect();

        Self::from_storage(words)
    }
}

impl SignedBigInteger {
    /// Sign byte followed by the big-endian bytes of the magnitude.
    ///
    /// See `UnsignedBigInteger::export_data`. An invalid value exports as no bytes at all.
    pub fn export_data(&self, remove_leading_zeros: bool) -> Vec<u8> {
        if self.is_invalid() {
            return Vec::new();
        }

        let mut bytes = vec![self.is_negative() as u8];
        bytes.extend(self.unsigned_value().export_data(remove_leading_zeros));
        bytes
    }

    /// Read a sign byte followed by a big-endian magnitude.
    ///
    /// Without a sign byte, or with a sign byte other than `0` or `1`, the value is invalid.
    pub fn import_data(bytes: &[u8]) -> Self {
        match bytes.split_first() {
            Some((&sign, magnitude)) if sign <= 1 => {
                Self::new(UnsignedBigInteger::import_data(magnitude), sign == 1)
            },
            Some((&sign, _)) => {
                tracing::debug!(sign, "sign byte should be 0 or 1, result is invalid");
                Self::create_invalid()
            },
            None => {
                tracing::debug!("no sign byte, result is invalid");
                Self::create_invalid()
            },
        }
    }
}
