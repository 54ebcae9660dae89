//! Variant operations.

use pennant_storage::{
    CreateVariantRequest, DeleteVariantRequest, Empty, GetVariantRequest, ListVariantRequest,
    Result, UpdateVariantRequest, Variant, VariantList, VariantStore,
};
use tracing::debug;

use crate::Server;
use crate::pagination::Pagination;

impl Server {
    pub async fn get_variant(&self, req: &GetVariantRequest) -> Result<Variant> {
        debug!(request = ?req, "get variant");
        let variant = self.store.get_variant(&req.flag_key, &req.id).await?;
        debug!(response = ?variant, "get variant");
        Ok(variant)
    }

    /// List a page of one flag's variants along with that flag's variant count.
    pub async fn list_variants(&self, req: &ListVariantRequest) -> Result<VariantList> {
        debug!(request = ?req, "list variants");

        let page = Pagination::new(req.offset, req.limit);
        let total_count = self.store.count_variants(&req.flag_key, &[]).await?;
        let variants = self
            .store
            .list_variants(&req.flag_key, &page.options())
            .await?;

        let resp = VariantList {
            variants,
            total_count,
        };
        debug!(
            flag_key = %req.flag_key,
            offset = page.offset,
            limit = page.limit,
            returned = resp.variants.len(),
            total = resp.total_count,
            "list variants"
        );
        Ok(resp)
    }

    /// Create a variant; the store assigns its id.
    pub async fn create_variant(&self, req: &CreateVariantRequest) -> Result<Variant> {
        debug!(request = ?req, "create variant");
        let variant = self.store.create_variant(req).await?;
        debug!(response = ?variant, "create variant");
        Ok(variant)
    }

    pub async fn update_variant(&self, req: &UpdateVariantRequest) -> Result<Variant> {
        debug!(request = ?req, "update variant");
        let variant = self.store.update_variant(req).await?;
        debug!(response = ?variant, "update variant");
        Ok(variant)
    }

    pub async fn delete_variant(&self, req: &DeleteVariantRequest) -> Result<Empty> {
        debug!(request = ?req, "delete variant");
        self.store.delete_variant(req).await?;
        Ok(Empty {})
    }
}
