use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tradeflow_core::{Entity, entity_id};

use crate::country::Country;

entity_id!(
    /// Client identifier (`C-500`, `C-501`, ...).
    ClientId,
    "C"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientType {
    Corporate,
    Distributor,
    #[serde(rename = "Pharmaceutical Company")]
    PharmaceuticalCompany,
}

impl ClientType {
    pub const ALL: [ClientType; 3] = [
        ClientType::Corporate,
        ClientType::Distributor,
        ClientType::PharmaceuticalCompany,
    ];
}

/// A buying customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub country: Country,
    /// Cumulative sales to this client.
    pub total_sales: u64,
    pub last_order_date: NaiveDate,
    /// Likelihood (0-100) that the client orders again.
    pub reorder_probability: u8,
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
