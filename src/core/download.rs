use crate::delivery::{Delivered, FileDelivery};
use crate::errors::AppResult;
use crate::fetch::ApiClient;
use crate::models::ReportRequest;

/// Fetch-and-download: one authenticated request, then one delivery.
pub struct DownloadLogic;

impl DownloadLogic {
    /// Download `target` and save the body verbatim as `filename`.
    ///
    /// Delivery only happens after a successful response: a rejected
    /// request never produces a file.
    pub fn fetch_and_deliver(
        client: &ApiClient,
        delivery: &dyn FileDelivery,
        target: &str,
        request: Option<&ReportRequest>,
        filename: &str,
    ) -> AppResult<Delivered> {
        let bytes = client.fetch_bytes(target, request)?;
        delivery.deliver(filename, &bytes)
    }
}
