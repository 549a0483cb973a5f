use thiserror::Error;

/// Why a `- <kind> ... Added on <date>` line could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("metadata line must start with '-'")]
    MissingDash,
    #[error("metadata line has no 'Added on' clause")]
    MissingAddedOn,
    #[error("metadata line has no clipping type before its clauses")]
    EmptyKind,
}

/// Error for a single separator-delimited block.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("block has {lines} line(s), expected a title line and a metadata line")]
    Incomplete { lines: usize },
    #[error("malformed metadata line {line:?}: {source}")]
    Metadata {
        line: String,
        #[source]
        source: MetadataError,
    },
}

/// Error type for the conversion pipeline. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("clipping #{index} could not be parsed: {source}")]
    MalformedBlock {
        index: usize,
        #[source]
        source: BlockError,
    },
    #[error("Invalid formatter: '{0}' (expected one of: json, kindle, html)")]
    UnknownFormat(String),
    #[error("failed to serialize clippings of '{title}': {source}")]
    Serialize {
        title: String,
        #[source]
        source: serde_json::Error,
    },
}
