// --- File: crates/shopauth_oauth/src/store.rs ---
use shopauth_common::{BoxFuture, SdkError, ShopScopeStore};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local shop -> scope mapping. Starts empty, only grows, lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryShopScopeStore {
    scopes: RwLock<HashMap<String, String>>,
}

impl InMemoryShopScopeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every shop seen so far.
    pub async fn snapshot(&self) -> HashMap<String, String> {
        self.scopes.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.scopes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scopes.read().await.is_empty()
    }
}

impl ShopScopeStore for InMemoryShopScopeStore {
    fn get(&self, shop: &str) -> BoxFuture<'_, Option<String>, SdkError> {
        let shop = shop.to_string();
        Box::pin(async move { Ok(self.scopes.read().await.get(&shop).cloned()) })
    }

    fn put(&self, shop: &str, scope: &str) -> BoxFuture<'_, (), SdkError> {
        let shop = shop.to_string();
        let scope = scope.to_string();
        Box::pin(async move {
            self.scopes.write().await.insert(shop, scope);
            Ok(())
        })
    }
}
