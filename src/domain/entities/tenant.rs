use serde::{Deserialize, Serialize};

/// Facts about the tenant and the lease, embedded in the assistant persona
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TenantProfile {
    pub tenant_name: String,
    pub unit: String,
    pub monthly_rent: f64,
    pub due_date: String,
    pub landlord: String,
}

impl Default for TenantProfile {
    fn default() -> Self {
        Self {
            tenant_name: "Demo Tenant".to_string(),
            unit: "203".to_string(),
            monthly_rent: 1900.0,
            due_date: "1st of each month".to_string(),
            landlord: "Property Management LLC".to_string(),
        }
    }
}
