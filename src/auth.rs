//! Bearer token caching.
//!
//! `TokenCache` hands out a valid access token per credential identity and
//! makes sure concurrent callers hitting a cold or stale entry trigger a
//! single fetch. Reads go through an `RwLock`; refreshes are serialized by
//! one cache-wide mutex and re-check the map after acquiring it, so every
//! waiter in a refresh wave observes the token fetched by the first one.
//!
//! A cache is shared by every client built from the same `GlassixClient`
//! and can be injected with `GlassixClient::with_token_cache` to share it
//! further.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};

use crate::error::{GlassixError, Result};
use crate::models::TokenResponse;

/// Tokens expiring within this margin are refreshed before use.
pub const REFRESH_MARGIN: Duration = Duration::from_secs(5 * 60);

/// Upper bound on a cached token's lifetime, whatever the server claims.
const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Cached token with expiration tracking.
#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.expires_at > Instant::now() + REFRESH_MARGIN
    }
}

/// Cache of bearer tokens keyed by credential identity.
#[derive(Default)]
pub struct TokenCache {
    tokens: RwLock<HashMap<String, CachedToken>>,
    refresh_lock: Mutex<()>,
}

impl TokenCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a valid token for `identity`, calling `fetch` only if the
    /// cached entry is missing or expires within `REFRESH_MARGIN`.
    ///
    /// # Arguments
    ///
    /// * `identity` - Cache key, see `Credentials::token_key`
    /// * `fetch` - Performs the remote token request
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::Authentication` if `fetch` fails or yields an
    /// empty token. Nothing is cached in that case. Dropping the returned
    /// future mid-fetch leaves the cache untouched as well.
    pub async fn get_token<F, Fut>(&self, identity: &str, fetch: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<TokenResponse>>,
    {
        if let Some(token) = self.lookup(identity).await {
            return Ok(token);
        }

        let _guard = self.refresh_lock.lock().await;

        // Another waiter may have refreshed while we queued on the lock.
        if let Some(token) = self.lookup(identity).await {
            return Ok(token);
        }

        tracing::debug!("Refreshing Glassix access token");

        let response = fetch().await.map_err(|e| match e {
            GlassixError::Authentication(_) => e,
            other => GlassixError::authentication(other.to_string()),
        })?;

        if response.access_token.trim().is_empty() {
            return Err(GlassixError::authentication(
                "token endpoint returned an empty access token",
            ));
        }

        let lifetime = Duration::from_secs(u64::try_from(response.expires_in).unwrap_or(0))
            .min(MAX_TOKEN_LIFETIME);
        let cached = CachedToken {
            access_token: response.access_token,
            expires_at: Instant::now() + lifetime,
        };
        let token = cached.access_token.clone();
        self.tokens.write().await.insert(identity.to_string(), cached);

        tracing::debug!(expires_in_secs = lifetime.as_secs(), "Access token cached");

        Ok(token)
    }

    /// Drops the cached token for `identity`, forcing a fetch on next use.
    pub async fn invalidate(&self, identity: &str) {
        self.tokens.write().await.remove(identity);
    }

    async fn lookup(&self, identity: &str) -> Option<String> {
        let tokens = self.tokens.read().await;
        tokens
            .get(identity)
            .filter(|t| t.is_fresh())
            .map(|t| t.access_token.clone())
    }
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    fn response(token: &str, expires_in: i64) -> TokenResponse {
        TokenResponse {
            access_token: token.to_string(),
            token_type: Some("bearer".to_string()),
            expires_in,
        }
    }

    #[tokio::test]
    async fn test_concurrent_cold_cache_fetches_once() {
        let cache = Arc::new(TokenCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..20 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .get_token("acme:key:user", move || async move {
                        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Ok(response(&format!("tok-{}", n), 3600))
                    })
                    .await
            }));
        }

        let mut tokens = Vec::new();
        for handle in handles {
            tokens.push(handle.await.unwrap().unwrap());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(tokens.iter().all(|t| t == "tok-1"));
    }

    #[tokio::test]
    async fn test_fresh_token_is_reused() {
        let cache = TokenCache::new();
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let fetch = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(response("long-lived", 3600))
        };

        assert_eq!(assert_ok!(cache.get_token("id", fetch).await), "long-lived");
        assert_eq!(assert_ok!(cache.get_token("id", fetch).await), "long-lived");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_token_expiring_within_margin_is_refreshed() {
        let cache = TokenCache::new();
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let fetch = move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            // Four minutes: inside the refresh margin.
            Ok(response(&format!("short-{}", n), 240))
        };

        assert_eq!(assert_ok!(cache.get_token("id", fetch).await), "short-1");
        assert_eq!(assert_ok!(cache.get_token("id", fetch).await), "short-2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_huge_expiry_is_capped() {
        let cache = TokenCache::new();
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let fetch = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(response("forever", i64::MAX))
        };

        assert_eq!(assert_ok!(cache.get_token("id", fetch).await), "forever");
        assert_eq!(assert_ok!(cache.get_token("id", fetch).await), "forever");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_negative_expiry_is_refreshed() {
        let cache = TokenCache::new();
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let fetch = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(response("stale", -1))
        };

        assert_ok!(cache.get_token("id", fetch).await);
        assert_ok!(cache.get_token("id", fetch).await);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_identities_are_cached_separately() {
        let cache = TokenCache::new();
        let a = cache.get_token("a", || async { Ok(response("tok-a", 3600)) }).await;
        let b = cache.get_token("b", || async { Ok(response("tok-b", 3600)) }).await;
        assert_eq!(assert_ok!(a), "tok-a");
        assert_eq!(assert_ok!(b), "tok-b");
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let cache = TokenCache::new();
        let failed = cache
            .get_token("id", || async {
                Err(GlassixError::Api {
                    status: 401,
                    message: "bad secret".to_string(),
                })
            })
            .await;
        let err = assert_err!(failed);
        assert!(matches!(err, GlassixError::Authentication(ref m) if m.contains("bad secret")));

        let ok = cache.get_token("id", || async { Ok(response("recovered", 3600)) }).await;
        assert_eq!(assert_ok!(ok), "recovered");
    }

    #[tokio::test]
    async fn test_empty_token_is_an_error() {
        let cache = TokenCache::new();
        let result = cache.get_token("id", || async { Ok(response("  ", 3600)) }).await;
        let err = assert_err!(result);
        assert!(matches!(err, GlassixError::Authentication(_)));

        let ok = cache.get_token("id", || async { Ok(response("real", 3600)) }).await;
        assert_eq!(assert_ok!(ok), "real");
    }

    #[tokio::test]
    async fn test_cancelled_fetch_leaves_cache_empty() {
        let cache = TokenCache::new();
        let cancelled = tokio::time::timeout(
            Duration::from_millis(20),
            cache.get_token("id", || std::future::pending::<Result<TokenResponse>>()),
        )
        .await;
        assert!(cancelled.is_err());

        // The refresh lock was released and no entry was written.
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let token = cache
            .get_token("id", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(response("after-cancel", 3600))
            })
            .await;
        assert_eq!(assert_ok!(token), "after-cancel");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = TokenCache::new();
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let fetch = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(response("tok", 3600))
        };
        assert_ok!(cache.get_token("id", fetch).await);
        cache.invalidate("id").await;
        assert_ok!(cache.get_token("id", fetch).await);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
