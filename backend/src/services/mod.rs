//! Business logic services for the Crop Health Monitoring Platform

pub mod crop;
pub mod dashboard;
pub mod monitoring;
pub mod observation;

pub use crop::CropService;
pub use dashboard::DashboardService;
pub use monitoring::MonitoringService;
pub use observation::ObservationService;
