//! Collaborator traits consumed by the core.
//!
//! The presentation layer decides how responses are cached; the core only
//! signals when everything it has cached is stale.

/// A cache of rendered responses that can be dropped wholesale.
pub trait ResponseCache: Send + Sync {
    /// Discard every cached response.
    fn invalidate_all(&self) -> anyhow::Result<()>;
}

/// Cache that holds nothing.
pub struct NoopCache;

impl ResponseCache for NoopCache {
    fn invalidate_all(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
