//! One-time admin code used to promote the first administrator.
//!
//! At startup, when no ADMIN user exists, a random code is generated and a login link
//! carrying it is logged. Whoever logs in through that link before the code expires
//! becomes ADMIN. Codes are kept in memory only and are consumed on first valid use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default lifetime of a generated code.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

const CODE_LENGTH: usize = 32;

struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory holder of the current admin code.
///
/// Cloning shares the same code, so the instance in `AppState` and the one used at
/// startup to log the link observe each other.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    /// Creates a service whose codes live for [`ADMIN_CODE_TTL`].
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a fresh 32 character alphanumeric code, replacing any previous one.
    pub async fn generate(&self) -> String {
        let code: String = rand::rng()
            .sample_iter(rand::distr::Alphanumeric)
            .take(CODE_LENGTH)
            .map(char::from)
            .collect();

        *self.code.write().await = Some(AdminCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        code
    }

    /// Checks `input` against the stored code.
    ///
    /// A match consumes the code. An expired code is discarded and never matches.
    ///
    /// # Returns
    /// - `true` - Input matched a live code, which is now consumed
    /// - `false` - No code, wrong code, or expired code
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        let valid = match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                return false;
            }
            Some(stored) => stored.code == input,
            None => false,
        };

        if valid {
            *code = None;
        }

        valid
    }

    /// Whether a live code is currently stored.
    pub async fn has_valid_code(&self) -> bool {
        self.code
            .read()
            .await
            .as_ref()
            .is_some_and(|stored| !stored.is_expired())
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
