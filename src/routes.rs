use crate::handlers::ack_operation;
use crate::utils::create_error_response;

use hyper::{Body, Request, Response, StatusCode};

pub async fn handle_request(
    req: Request<Body>,
) -> Result<Response<Body>, Box<dyn std::error::Error + Send + Sync>> {
    match (req.method(), req.uri().path()) {
        (&hyper::Method::POST, "/send") => {
            let body_bytes = hyper::body::to_bytes(req.into_body()).await?;
            let body_str = String::from_utf8(body_bytes.to_vec())?;

            ack_operation(body_str.trim())
        }
        (_, "/send") => {
            create_error_response(StatusCode::METHOD_NOT_ALLOWED, "POST only".to_string())
        }
        _ => create_error_response(StatusCode::NOT_FOUND, "Path not found".into()),
    }
}
