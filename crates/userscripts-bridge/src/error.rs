/// Request failures. The `Display` text is what the web layer receives in
/// the reply's error slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("bad message body: expected a command name")]
    MalformedBody,

    #[error("Unexpected message body")]
    UnexpectedBody(String),

    #[error("ScriptsDirectoryUrl malformed: no scripts directory is set")]
    LocationUnset,

    #[error("ScriptsDirectoryUrl malformed: {0}")]
    LocationMalformed(String),
}
