/// Error type for pluscodes-rs operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlusCodeError {
    /// The requested code length is below 4 or an odd pair-phase length.
    InvalidCodeLength(usize),
    /// The code is not a valid full code (decoding needs a full code).
    NotFullCode(String),
    /// The code is neither a short code nor a full code.
    NotShortCode(String),
    /// The code is padded and cannot be shortened further.
    PaddedCode(String),
    /// The reference location is too far from the code center to shorten.
    ReferenceTooFar,
}

impl std::fmt::Display for PlusCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlusCodeError::InvalidCodeLength(len) => {
                write!(f, "Invalid code length: {}", len)
            }
            PlusCodeError::NotFullCode(code) => {
                write!(f, "Not a valid full code: {}", code)
            }
            PlusCodeError::NotShortCode(code) => {
                write!(f, "Not a valid short code: {}", code)
            }
            PlusCodeError::PaddedCode(code) => {
                write!(f, "Cannot shorten a padded code: {}", code)
            }
            PlusCodeError::ReferenceTooFar => {
                write!(f, "Reference location is too far from the code center")
            }
        }
    }
}

impl std::error::Error for PlusCodeError {}
