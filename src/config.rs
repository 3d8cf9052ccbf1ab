//! Configuration values for rendering and binary encoding.

/// Selects the `bincode` configuration used by [`crate::sequence::traits::Bincode`].
///
/// - `Standard`: variable-length integer encoding (`bincode::config::standard()`).
/// - `Legacy`: fixed-width integers, compatible with the bincode 1.x wire layout
///   (`bincode::config::legacy()`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BincodeConfiguration {
    #[default]
    Standard,
    Legacy,
}

impl BincodeConfiguration {
    pub(crate) fn encode<V>(&self, value: &V) -> anyhow::Result<Vec<u8>>
    where
        V: serde::Serialize + ?Sized,
    {
        let bytes = match self {
            Self::Standard => bincode::serde::encode_to_vec(value, bincode::config::standard())?,
            Self::Legacy => bincode::serde::encode_to_vec(value, bincode::config::legacy())?,
        };

        tracing::trace!(configuration = ?self, bytes = bytes.len(), "encoded");
        Ok(bytes)
    }

    /// Decodes one value and rejects trailing bytes.
    pub(crate) fn decode<V>(&self, bytes: &[u8]) -> anyhow::Result<V>
    where
        V: serde::de::DeserializeOwned,
    {
        let (value, read) = match self {
            Self::Standard => bincode::serde::decode_from_slice(bytes, bincode::config::standard())?,
            Self::Legacy => bincode::serde::decode_from_slice(bytes, bincode::config::legacy())?,
        };

        anyhow::ensure!(read == bytes.len(), "{} trailing bytes after decoded value", bytes.len() - read);
        Ok(value)
    }
}

/// ### -> `RenderConfiguration`
///
/// Controls how a sequence is rendered to a string.
///
/// - `separator`: placed between every pair of converted elements. Defaults to `", "`.
/// - `worker_threads`: number of runtime worker threads for a [`crate::render::Renderer`].
///   `None` keeps tokio's default (one per core).
/// - `max_blocking_threads`: upper bound on the threads running element conversions
///   concurrently inside a [`crate::render::Renderer`]. `None` keeps tokio's default.
///
/// The thread settings only apply to a `Renderer`, which owns its runtime. The async
/// `render_with` uses whatever runtime it is polled on and only reads `separator`.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::RenderConfiguration;
///
/// let configuration = RenderConfiguration::default()
///     .with_separator(" | ")
///     .with_worker_threads(2);
///
/// assert_eq!(configuration.separator, " | ");
/// assert_eq!(configuration.worker_threads, Some(2));
/// assert_eq!(configuration.max_blocking_threads, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfiguration {
    pub separator: String,
    pub worker_threads: Option<usize>,
    pub max_blocking_threads: Option<usize>,
}

impl Default for RenderConfiguration {
    fn default() -> Self {
        Self {
            separator: String::from(", "),
            worker_threads: None,
            max_blocking_threads: None,
        }
    }
}

impl RenderConfiguration {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = Some(worker_threads);
        self
    }

    pub fn with_max_blocking_threads(mut self, max_blocking_threads: usize) -> Self {
        self.max_blocking_threads = Some(max_blocking_threads);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let configuration = RenderConfiguration::default();
        assert_eq!(configuration.separator, ", ");
        assert!(configuration.worker_threads.is_none());
        assert!(configuration.max_blocking_threads.is_none());
        assert_eq!(BincodeConfiguration::default(), BincodeConfiguration::Standard);
    }

    #[test]
    fn setters_chain() {
        let configuration = RenderConfiguration::default()
            .with_separator(";")
            .with_worker_threads(3)
            .with_max_blocking_threads(8);

        assert_eq!(configuration.separator, ";");
        assert_eq!(configuration.worker_threads, Some(3));
        assert_eq!(configuration.max_blocking_threads, Some(8));
    }
}
