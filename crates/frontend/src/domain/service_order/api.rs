use contracts::domain::service_order::aggregate::{ServiceOrder, ServiceOrderListQuery};
use contracts::enums::Sector;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

fn list_url(sector: Sector) -> Result<String, String> {
    let query = serde_qs::to_string(&ServiceOrderListQuery { sector })
        .map_err(|e| format!("Failed to encode query: {}", e))?;
    Ok(api_url(&format!("/api/service-orders?{}", query)))
}

/// Fetch service orders of one sector
pub async fn fetch_service_orders(sector: Sector) -> Result<Vec<ServiceOrder>, String> {
    let mut request = Request::get(&list_url(sector)?).header("Accept", "application/json");
    if let Some(token) = storage::get_access_token() {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch service orders: {}", response.status()));
    }

    response
        .json::<Vec<ServiceOrder>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_query() {
        let query = serde_qs::to_string(&ServiceOrderListQuery { sector: Sector::Informatica }).unwrap();
        assert_eq!(query, "sector=informatica");
    }
}
