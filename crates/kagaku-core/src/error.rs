use thiserror::Error;

/// Errors surfaced at entity registration time
///
/// Misconfiguration fails fast here; once an entity is registered its
/// invariants hold for the rest of its lifetime (a material always carries
/// a substance, vetoed transitions are silent no-ops, never errors).
#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("material spec '{0}' has no substance")]
    MissingSubstance(String),
}
