//! Reserved-path registry.
//!
//! The statistics and reset endpoints hide behind randomly generated URL
//! segments acting as lightweight capability tokens. Tokens are generated
//! once and persisted so bookmarked URLs survive restarts; a missing or
//! corrupt token file produces a fresh set (invalidating old URLs).

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Token length in characters. With a 62-symbol alphabet this gives a
/// 62^16 space, so independently drawn tokens are assumed distinct.
const TOKEN_LENGTH: usize = 16;

/// The three reserved URL segments, immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedPaths {
    pub stats_path: String,
    pub stats_json_path: String,
    pub reset_path: String,
}

impl ReservedPaths {
    /// Generates three independent random tokens.
    ///
    /// The RNG is injected so tests can pass a seeded generator; production
    /// uses the process-level OS-seeded source.
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            stats_path: random_token(rng),
            stats_json_path: random_token(rng),
            reset_path: random_token(rng),
        }
    }

    /// Loads tokens from `path`, generating and saving a fresh set when the
    /// file is absent or unparsable.
    ///
    /// A write failure after generation is logged but non-fatal: the server
    /// runs with the in-memory tokens and they regenerate on the next
    /// restart.
    pub async fn load_or_generate(path: &Path, rng: &mut impl Rng) -> Self {
        match tokio::fs::read(path).await {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(paths) => return paths,
                Err(e) => {
                    tracing::warn!(
                        "Corrupt paths file {}: {}. Generating new paths.",
                        path.display(),
                        e
                    );
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    "Failed to read paths file {}: {}. Generating new paths.",
                    path.display(),
                    e
                );
            }
        }

        let paths = Self::generate(rng);
        match serde_json::to_vec(&paths) {
            Ok(data) => {
                if let Err(e) = tokio::fs::write(path, data).await {
                    tracing::error!(
                        "Failed to write paths file {}: {}",
                        path.display(),
                        e
                    );
                }
            }
            Err(e) => tracing::error!("Failed to encode reserved paths: {}", e),
        }

        paths
    }
}

fn random_token(rng: &mut impl Rng) -> String {
    rng.sample_iter(Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_token_length() {
        let paths = ReservedPaths::generate(&mut rand::rng());
        assert_eq!(paths.stats_path.len(), TOKEN_LENGTH);
        assert_eq!(paths.stats_json_path.len(), TOKEN_LENGTH);
        assert_eq!(paths.reset_path.len(), TOKEN_LENGTH);
    }

    #[test]
    fn test_token_alphanumeric() {
        let paths = ReservedPaths::generate(&mut rand::rng());
        for token in [&paths.stats_path, &paths.stats_json_path, &paths.reset_path] {
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_produces_unique_tokens() {
        let mut rng = rand::rng();
        let mut tokens = HashSet::new();

        for _ in 0..100 {
            let paths = ReservedPaths::generate(&mut rng);
            tokens.insert(paths.stats_path);
            tokens.insert(paths.stats_json_path);
            tokens.insert(paths.reset_path);
        }

        assert_eq!(tokens.len(), 300);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = ReservedPaths::generate(&mut StdRng::seed_from_u64(42));
        let b = ReservedPaths::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let c = ReservedPaths::generate(&mut StdRng::seed_from_u64(43));
        assert_ne!(a, c);
    }
}
