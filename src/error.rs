/// Errors from parsing a version string.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// The input contained no digit characters, so no version number could be
    /// extracted from it.
    #[error("no numbers found in `{input}`")]
    NoNumbers {
        /// The string that was being parsed.
        input: String,
    },

    /// A run of digits in the input was too large to represent.
    #[error("number `{digits}` in `{input}` is too large")]
    NumberOverflow {
        /// The digit run that overflowed.
        digits: String,
        /// The string that was being parsed.
        input: String,
    },
}
