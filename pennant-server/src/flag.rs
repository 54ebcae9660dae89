//! Flag operations.

use pennant_storage::{
    CreateFlagRequest, DeleteFlagRequest, Empty, Flag, FlagList, FlagStore, GetFlagRequest,
    ListFlagRequest, Result, UpdateFlagRequest,
};
use tracing::debug;

use crate::Server;
use crate::pagination::Pagination;

impl Server {
    /// Get a flag by key.
    pub async fn get_flag(&self, req: &GetFlagRequest) -> Result<Flag> {
        debug!(request = ?req, "get flag");
        let flag = self.store.get_flag(&req.key).await?;
        debug!(response = ?flag, "get flag");
        Ok(flag)
    }

    /// List a page of flags along with the total flag count.
    ///
    /// `offset` and `limit` are normalized before the store sees them.
    pub async fn list_flags(&self, req: &ListFlagRequest) -> Result<FlagList> {
        debug!(request = ?req, "list flags");

        let page = Pagination::new(req.offset, req.limit);
        // Paging options never reach count.
        let total_count = self.store.count_flags(&[]).await?;
        let flags = self.store.list_flags(&page.options()).await?;

        let resp = FlagList { flags, total_count };
        debug!(
            offset = page.offset,
            limit = page.limit,
            returned = resp.flags.len(),
            total = resp.total_count,
            "list flags"
        );
        Ok(resp)
    }

    pub async fn create_flag(&self, req: &CreateFlagRequest) -> Result<Flag> {
        debug!(request = ?req, "create flag");
        let flag = self.store.create_flag(req).await?;
        debug!(response = ?flag, "create flag");
        Ok(flag)
    }

    pub async fn update_flag(&self, req: &UpdateFlagRequest) -> Result<Flag> {
        debug!(request = ?req, "update flag");
        let flag = self.store.update_flag(req).await?;
        debug!(response = ?flag, "update flag");
        Ok(flag)
    }

    /// Delete a flag. The deleted flag is not returned.
    pub async fn delete_flag(&self, req: &DeleteFlagRequest) -> Result<Empty> {
        debug!(request = ?req, "delete flag");
        self.store.delete_flag(req).await?;
        Ok(Empty {})
    }
}
