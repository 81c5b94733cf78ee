//! Category collection. Same contract as the task store minus ordering.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use taskboard_core::CategoryId;

use crate::backend::CategoryBackend;
use crate::errors::{Result, StoreError};
use crate::latency::{Latency, StoreOp};
use crate::seed;
use crate::types::{Category, CategoryCreateParams, CategoryUpdateParams, DEFAULT_CATEGORY_ICON};

/// In-memory category store. Clones share state.
#[derive(Clone)]
pub struct CategoryStore {
    categories: Arc<Mutex<Vec<Category>>>,
    latency: Latency,
}

impl fmt::Debug for CategoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryStore")
            .field("len", &self.len())
            .field("latency", &self.latency)
            .finish()
    }
}

impl CategoryStore {
    /// An empty store.
    pub fn new(latency: Latency) -> Self {
        Self {
            categories: Arc::new(Mutex::new(Vec::new())),
            latency,
        }
    }

    /// A store holding `categories`. Ids must be unique.
    pub fn with_categories(categories: Vec<Category>, latency: Latency) -> Result<Self> {
        seed::ensure_unique(categories.iter().map(|c| c.id.as_str()), "category")?;
        Ok(Self {
            categories: Arc::new(Mutex::new(categories)),
            latency,
        })
    }

    /// A store holding the compiled-in mock categories.
    pub fn seeded(latency: Latency) -> Result<Self> {
        Self::with_categories(seed::default_categories()?, latency)
    }

    /// Number of categories right now.
    pub fn len(&self) -> usize {
        self.categories.lock().len()
    }

    /// Whether the store holds no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.lock().is_empty()
    }

    /// Copy of every category.
    pub async fn get_all(&self) -> Vec<Category> {
        self.latency.wait(StoreOp::GetAll).await;
        self.categories.lock().clone()
    }

    /// Copy of one category.
    pub async fn get_by_id(&self, id: &CategoryId) -> Result<Category> {
        self.latency.wait(StoreOp::GetById).await;
        self.categories
            .lock()
            .iter()
            .find(|c| c.id == *id)
            .cloned()
            .ok_or_else(|| StoreError::category_not_found(id.as_str()))
    }

    /// Append a new category.
    pub async fn create(&self, params: &CategoryCreateParams) -> Category {
        self.latency.wait(StoreOp::Create).await;
        let category = Category {
            id: CategoryId::generate(),
            name: params.name.clone(),
            color: params.color.clone(),
            icon: params
                .icon
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string()),
        };
        self.categories.lock().push(category.clone());
        debug!(category_id = %category.id, name = %category.name, "created category");
        category
    }

    /// Shallow-merge `updates` into a category.
    pub async fn update(&self, id: &CategoryId, updates: &CategoryUpdateParams) -> Result<Category> {
        self.latency.wait(StoreOp::Update).await;
        let mut categories = self.categories.lock();
        let category = categories
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| StoreError::category_not_found(id.as_str()))?;
        updates.apply_to(category);
        debug!(category_id = %id, "updated category");
        Ok(category.clone())
    }

    /// Remove a category. Tasks that name it keep the name.
    pub async fn delete(&self, id: &CategoryId) -> Result<bool> {
        self.latency.wait(StoreOp::Delete).await;
        let mut categories = self.categories.lock();
        let index = categories
            .iter()
            .position(|c| c.id == *id)
            .ok_or_else(|| StoreError::category_not_found(id.as_str()))?;
        let _ = categories.remove(index);
        debug!(category_id = %id, "deleted category");
        Ok(true)
    }
}

#[async_trait]
impl CategoryBackend for CategoryStore {
    async fn get_all(&self) -> Result<Vec<Category>> {
        Ok(CategoryStore::get_all(self).await)
    }

    async fn get_by_id(&self, id: &CategoryId) -> Result<Category> {
        CategoryStore::get_by_id(self, id).await
    }

    async fn create(&self, params: &CategoryCreateParams) -> Result<Category> {
        Ok(CategoryStore::create(self, params).await)
    }

    async fn update(&self, id: &CategoryId, updates: &CategoryUpdateParams) -> Result<Category> {
        CategoryStore::update(self, id, updates).await
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool> {
        CategoryStore::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn store() -> CategoryStore {
        CategoryStore::seeded(Latency::none()).unwrap()
    }

    #[tokio::test]
    async fn seeded_categories_listed() {
        let all = store().get_all().await;
        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Work", "Personal", "Shopping", "Health"]);
    }

    #[tokio::test]
    async fn create_appends_with_default_icon() {
        let store = store();
        let created = store
            .create(&CategoryCreateParams {
                name: "Errands".to_string(),
                color: "#EF4444".to_string(),
                icon: None,
            })
            .await;
        assert_eq!(created.icon, "Folder");
        assert!(created.id.as_str().starts_with("cat-"));
        let all = store.get_all().await;
        assert_eq!(all.last(), Some(&created));
    }

    #[tokio::test]
    async fn update_merges_and_returns_copy() {
        let store = store();
        let id = CategoryId::from("1");
        let updated = store
            .update(
                &id,
                &CategoryUpdateParams {
                    color: Some("#000000".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Work");
        assert_eq!(updated.color, "#000000");
        assert_eq!(store.get_by_id(&id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let store = store();
        let id = CategoryId::from("99");
        assert_matches!(store.get_by_id(&id).await, Err(StoreError::NotFound { entity: "Category", .. }));
        assert_matches!(
            store.update(&id, &CategoryUpdateParams::default()).await,
            Err(StoreError::NotFound { .. })
        );
        assert_matches!(store.delete(&id).await, Err(StoreError::NotFound { .. }));
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn delete_removes() {
        let store = store();
        assert!(store.delete(&CategoryId::from("2")).await.unwrap());
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn debug_reports_len() {
        assert!(format!("{:?}", store()).contains("len: 4"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let dup = Category {
            id: CategoryId::from("1"),
            name: "A".to_string(),
            color: "#fff".to_string(),
            icon: "Folder".to_string(),
        };
        let result = CategoryStore::with_categories(vec![dup.clone(), dup], Latency::none());
        assert_matches!(result, Err(StoreError::InvalidSeed(_)));
    }
}
