use serde_json::Value;
use std::future::Future;

use crate::errors::IngestResult;

/// Where player profile documents come from
pub trait PlayerSource {
    /// Raw profile document for `sr:competitor:<api_id_int>`
    fn fetch_profile(&self, api_id_int: u64) -> impl Future<Output = IngestResult<Value>> + Send;
}
