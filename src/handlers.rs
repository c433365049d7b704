use crate::utils::create_success_response;
use hyper::{Body, Response};

/// Operations the library gateway acknowledges.
pub const KNOWN_OPERATIONS: [&str; 3] = ["PRESTAMO", "DEVOLUCION", "RENOVACION"];

pub fn ack_operation(
    line: &str,
) -> Result<Response<Body>, Box<dyn std::error::Error + Send + Sync>> {
    // The gateway dispatches on the operation prefix alone; the key=value
    // fields are left for the downstream system to decode.
    if KNOWN_OPERATIONS.iter().any(|op| line.starts_with(op)) {
        create_success_response("ACK")
    } else {
        create_success_response("NACK:OperacionDesconocida")
    }
}
