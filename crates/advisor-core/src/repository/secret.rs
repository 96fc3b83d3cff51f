//! Secret provider trait definition.

use std::future::Future;
use std::pin::Pin;

use secrecy::SecretString;

use advisor_types::error::SecretError;

/// Trait for credential lookup backends (environment, test fixtures).
///
/// Returns `None` when the secret is not configured in this provider.
pub trait SecretProvider: Send + Sync {
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<SecretString>, SecretError>> + Send;
}

/// Object-safe version of [`SecretProvider`].
pub trait SecretProviderDyn: Send + Sync {
    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<SecretString>, SecretError>> + Send + 'a>>;
}

impl<T: SecretProvider> SecretProviderDyn for T {
    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<SecretString>, SecretError>> + Send + 'a>> {
        Box::pin(self.get(key))
    }
}

/// Type-erased secret provider.
pub struct BoxSecretProvider {
    inner: Box<dyn SecretProviderDyn + Send + Sync>,
}

impl BoxSecretProvider {
    pub fn new<T: SecretProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    /// Look up a secret by key.
    pub async fn get(&self, key: &str) -> Result<Option<SecretString>, SecretError> {
        self.inner.get_boxed(key).await
    }
}
