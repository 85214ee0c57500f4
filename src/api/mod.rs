pub mod audit;
pub mod backup;
pub mod call;
pub mod cbed;
pub mod contacts;
pub mod dashboard;
pub mod documents;
pub mod equipment;
pub mod inventory;
pub mod maintenance;
pub mod materials;
pub mod monitoring;
pub mod orders;
pub mod quality;
pub mod resource;
pub mod scheduling;
pub mod settings;
pub mod shipments;
pub mod templates;
pub mod tools;
pub mod versioning;
pub mod warehouse;
pub mod workflows;

pub use call::{ApiCall, ApiClient, ApiResponse, FailureMode, Verb};
pub use resource::ResourceClient;

use std::sync::Arc;

/// All module clients behind one handle, sharing a single [`ApiClient`].
pub struct Api {
    pub cbed: cbed::CbedApi,
    pub contacts: contacts::ContactsApi,
    pub equipment: equipment::EquipmentApi,
    pub orders: orders::OrdersApi,
    pub shipments: shipments::ShipmentsApi,
    pub templates: templates::TemplatesApi,
    pub warehouse: warehouse::WarehouseApi,
    pub workflows: workflows::WorkflowsApi,
    pub scheduling: scheduling::SchedulingApi,
    pub settings: settings::SettingsApi,
    pub monitoring: monitoring::MonitoringApi,
    pub audit: audit::AuditApi,
    pub backup: backup::BackupApi,
    pub dashboard: dashboard::DashboardApi,
    pub documents: documents::DocumentsApi,
    pub inventory: inventory::InventoryApi,
    pub maintenance: maintenance::MaintenanceApi,
    pub materials: materials::MaterialsApi,
    pub quality: quality::QualityApi,
    pub tools: tools::ToolsApi,
    pub versioning: versioning::VersioningApi,
}

impl Api {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            cbed: cbed::CbedApi::new(client.clone()),
            contacts: contacts::ContactsApi::new(client.clone()),
            equipment: equipment::EquipmentApi::new(client.clone()),
            orders: orders::OrdersApi::new(client.clone()),
            shipments: shipments::ShipmentsApi::new(client.clone()),
            templates: templates::TemplatesApi::new(client.clone()),
            warehouse: warehouse::WarehouseApi::new(client.clone()),
            workflows: workflows::WorkflowsApi::new(client.clone()),
            scheduling: scheduling::SchedulingApi::new(client.clone()),
            settings: settings::SettingsApi::new(client.clone()),
            monitoring: monitoring::MonitoringApi::new(client.clone()),
            audit: audit::AuditApi::new(client.clone()),
            backup: backup::BackupApi::new(client.clone()),
            dashboard: dashboard::DashboardApi::new(client.clone()),
            documents: documents::DocumentsApi::new(client.clone()),
            inventory: inventory::InventoryApi::new(client.clone()),
            maintenance: maintenance::MaintenanceApi::new(client.clone()),
            materials: materials::MaterialsApi::new(client.clone()),
            quality: quality::QualityApi::new(client.clone()),
            tools: tools::ToolsApi::new(client.clone()),
            versioning: versioning::VersioningApi::new(client),
        }
    }

    pub fn from_env(env: &crate::config::EnvConfig) -> Self {
        Self::new(Arc::new(ApiClient::from_env(env)))
    }
}
