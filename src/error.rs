/// Crate-level error types for wikilinks configuration.
///
/// Tokenization itself never fails: input that doesn't match the link grammar
/// is a no-match, an unresolvable page degrades to `exists = false`, and an
/// unrecognized embed extension degrades to the image rendering form. The
/// only fallible surface is loading options from disk.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
