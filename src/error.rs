use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a word file or a serialized index
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error writing a serialized index
    #[error("File \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// Error serializing the word index
    #[cfg(feature = "bincode")]
    #[error("Word index could not be serialized: {0}")]
    IndexSerializeError(String),

    /// Error deserializing a word index, or the decoded index is not usable
    #[error("Word index could not be deserialized: {0}")]
    IndexDeserializeError(String),

    /// Character can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(char),

    /// Label is not one of `a`..`z`
    #[error("Invalid letter label {0}")]
    InvalidLabel(u8),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// Attempt to place a tile outside the board
    #[error("Square at row:{row}, col:{col} is not on the board")]
    TilePlacementError { row: i8, col: i8 },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: i8, col: i8 },

    /// A rack holds at most 7 tiles
    #[error("Rack \"{0}\" has more than 7 tiles")]
    RackTooLarge(String),
}
