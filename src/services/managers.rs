//! Services assembling the manager detail page.

use serde_json::{Map, Value};

use crate::api::{ApiResult, FilingsApi};
use crate::dto::managers::ManagerPageData;
use crate::services::{ServiceError, ServiceResult};

/// Loads a manager together with their filings.
///
/// The manager record is optional, the filings list is not: when the
/// backend does not return it the page cannot be built.
pub async fn load_manager_page<A>(api: &A, cik: u64) -> ServiceResult<ManagerPageData>
where
    A: FilingsApi + ?Sized,
{
    let manager_endpoint = format!("/managers/{cik}");
    let manager = api
        .call(&manager_endpoint, &[])
        .await
        .decode::<Map<String, Value>>(&manager_endpoint)
        .unwrap_or_else(Map::new);

    let filings_endpoint = format!("/managers/{cik}/filings");
    let filings = match api.call(&filings_endpoint, &[]).await {
        ApiResult::Success(Value::Object(mut body)) => match body.remove("filings") {
            Some(Value::Array(filings)) => filings,
            _ => Vec::new(),
        },
        ApiResult::Success(_) => Vec::new(),
        ApiResult::Absent => {
            log::error!("Filings for manager {cik} are unavailable");
            return Err(ServiceError::Unavailable(format!(
                "filings for manager {cik}"
            )));
        }
    };

    Ok(ManagerPageData { manager, filings })
}
