use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error set shared by the schedule core, the import pipeline and the binary.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// User-supplied value that could not be parsed (times, days, ids, ranges).
    #[error("Parse error: {0}")]
    Parse(String),

    /// No command matches the first positional argument.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Schedule / Domain --------------------------------------------------
    /// An entry draft failed validation. The store turns this into a no-op.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Collaborator output that does not follow its JSON contract.
    #[error("Payload error: {0}")]
    Payload(String),

    /// Persisted schedule data this build cannot read.
    #[error("Storage error: {0}")]
    Storage(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue reading or writing the config file.
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
    pub fn payload<S: Into<String>>(msg: S) -> Self {
        Error::Payload(msg.into())
    }
    pub fn invalid_entry<S: Into<String>>(msg: S) -> Self {
        Error::InvalidEntry(msg.into())
    }
}
