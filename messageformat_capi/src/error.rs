#[diplomat::bridge]
#[diplomat::abi_rename = "messageformat_{0}"]
#[diplomat::attr(auto, namespace = "messageformat")]
pub mod ffi {
    /// The status kinds a formatting call can fail with. Matches the
    /// library's error taxonomy variant for variant.
    #[diplomat::enum_convert(messageformat::error::ErrorKind)]
    pub enum ErrorKind {
        Generic,
        Syntax,
        Range,
        Type,
        Overflow,
    }

    /// A formatting failure. The diagnostic message does not cross the
    /// boundary; only the kind does.
    pub struct MessageFormatError {
        pub kind: ErrorKind,
    }
}

impl From<messageformat::MessageFormatError> for ffi::MessageFormatError {
    fn from(other: messageformat::MessageFormatError) -> Self {
        Self {
            kind: other.kind().into(),
        }
    }
}
