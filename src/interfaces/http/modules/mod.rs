pub mod company;
pub mod contact;
pub mod diagnostics;
pub mod health;
pub mod metrics;
pub mod request_id;
pub mod services;
