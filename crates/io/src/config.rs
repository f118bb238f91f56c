//! Delimited-text layout shared by readers and writers.

use crate::error::IoError;

/// Layout of a delimited text file.
///
/// Defaults: comma delimiter, header row present, lines starting with `#`
/// skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedConfig {
    delimiter: char,
    has_header: bool,
    comment_prefix: Option<char>,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            comment_prefix: Some('#'),
        }
    }
}

impl DelimitedConfig {
    /// Tab-separated layout with the other defaults.
    pub fn tab_separated() -> Self {
        Self {
            delimiter: '\t',
            ..Self::default()
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether the first data line is a header.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets the comment prefix, or `None` to keep every line.
    pub fn with_comment_prefix(mut self, prefix: Option<char>) -> Self {
        self.comment_prefix = prefix;
        self
    }

    // --- Accessors ---

    /// Field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Whether a header row is present.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Comment prefix, if any.
    pub fn comment_prefix(&self) -> Option<char> {
        self.comment_prefix
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidConfig`] if the delimiter or comment prefix
    /// is not a single ASCII character, the delimiter is a quote or a line
    /// break, or the two are equal.
    pub fn validate(&self) -> Result<(), IoError> {
        ascii_byte(self.delimiter, "delimiter")?;
        if let Some(prefix) = self.comment_prefix {
            ascii_byte(prefix, "comment prefix")?;
        }
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(IoError::InvalidConfig {
                reason: format!("delimiter {:?} is not allowed", self.delimiter),
            });
        }
        if self.comment_prefix == Some(self.delimiter) {
            return Err(IoError::InvalidConfig {
                reason: "delimiter and comment prefix must differ".to_string(),
            });
        }
        Ok(())
    }

    /// CSV reader settings for this layout. Fields and headers are trimmed
    /// and rows may differ in length.
    pub(crate) fn reader_builder(&self) -> Result<csv::ReaderBuilder, IoError> {
        self.validate()?;
        let comment = self
            .comment_prefix
            .map(|c| ascii_byte(c, "comment prefix"))
            .transpose()?;
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(ascii_byte(self.delimiter, "delimiter")?)
            .has_headers(self.has_header)
            .comment(comment)
            .trim(csv::Trim::All)
            .flexible(true);
        Ok(builder)
    }

    /// CSV writer settings for this layout, with `\n` line endings.
    pub(crate) fn writer_builder(&self) -> Result<csv::WriterBuilder, IoError> {
        self.validate()?;
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(ascii_byte(self.delimiter, "delimiter")?)
            .terminator(csv::Terminator::Any(b'\n'));
        Ok(builder)
    }
}

fn ascii_byte(c: char, what: &str) -> Result<u8, IoError> {
    if c.is_ascii() {
        // ASCII chars fit in one byte.
        Ok(c as u8)
    } else {
        Err(IoError::InvalidConfig {
            reason: format!("{what} {c:?} must be an ASCII character"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = DelimitedConfig::default();
        assert_eq!(c.delimiter(), ',');
        assert!(c.has_header());
        assert_eq!(c.comment_prefix(), Some('#'));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn tab_separated_layout() {
        let c = DelimitedConfig::tab_separated();
        assert_eq!(c.delimiter(), '\t');
        assert!(c.has_header());
        assert!(c.reader_builder().is_ok());
        assert!(c.writer_builder().is_ok());
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(DelimitedConfig::default().with_delimiter('§').validate().is_err());
        assert!(
            DelimitedConfig::default()
                .with_comment_prefix(Some('¶'))
                .reader_builder()
                .is_err()
        );
    }

    #[test]
    fn rejects_bad_delimiters() {
        assert!(DelimitedConfig::default().with_delimiter('"').validate().is_err());
        assert!(DelimitedConfig::default().with_delimiter('#').validate().is_err());
        assert!(
            DelimitedConfig::default()
                .with_delimiter('#')
                .with_comment_prefix(None)
                .validate()
                .is_ok()
        );
    }
}
