pub mod auth;
pub mod gate;
pub mod response;

pub use auth::JwtSessionOracle;
pub use gate::{request_gate, GateState};
pub use response::{ApiResponse, ApiResult};
