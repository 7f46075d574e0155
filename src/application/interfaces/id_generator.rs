/// Source of record identifiers.
///
/// Implementations must never hand out the same value twice within a process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
