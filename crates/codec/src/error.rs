/// All errors that can be returned by an Encoder implementation.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A value could not be serialized by this encoder.
    #[error("encode failed for format {format_id}: {message}")]
    Encode { format_id: String, message: String },

    /// Stored bytes could not be deserialized by this encoder. Either the
    /// bytes are corrupt, or they were written by an incompatible encoding.
    #[error("decode failed for format {format_id}: {message}")]
    Decode { format_id: String, message: String },
}

impl CodecError {
    pub fn encode(format_id: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Encode {
            format_id: format_id.into(),
            message: message.into(),
        }
    }

    pub fn decode(format_id: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Decode {
            format_id: format_id.into(),
            message: message.into(),
        }
    }
}
