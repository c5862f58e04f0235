use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::Sector;

/// Service order as returned by `GET /api/service-orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: Uuid,
    /// Sequential number printed on the customer receipt
    pub number: i64,
    pub customer_name: String,
    pub equipment: String,
    /// Label of the configured situation ("Aguardando peça", "Pronto", ...)
    pub situation: String,
    pub technician: Option<String>,
    pub opened_at: DateTime<Utc>,
    pub sector: Sector,
}

/// Query parameters accepted by the list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceOrderListQuery {
    pub sector: Sector,
}
