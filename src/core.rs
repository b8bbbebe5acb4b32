pub mod calculation;
pub mod horizon;
pub mod metrics;
pub mod projection;
pub mod rate;
pub mod scenario;
pub mod validation;
