// Application layer - use cases over the sensor gateway
pub mod history_service;
pub mod live_service;
pub mod sensor_gateway;
