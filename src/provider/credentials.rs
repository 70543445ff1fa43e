use std::sync::Arc;

use crate::error::GenerationError;

/// Resolves the provider API key. Called once per provider request so a
/// rotated key is picked up without a restart.
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Result<String, GenerationError>;
}

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads the key from an environment variable at call time
#[derive(Clone)]
pub struct EnvCredentials {
    var: String,
    lookup: Lookup,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self::from_lookup(var, |name| std::env::var(name).ok())
    }

    fn from_lookup(
        var: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            var: var.into(),
            lookup: Arc::new(lookup),
        }
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Result<String, GenerationError> {
        (self.lookup)(&self.var)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GenerationError::MissingCredential(self.var.clone()))
    }
}
