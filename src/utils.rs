use hyper::{Body, Response, StatusCode};

pub fn create_success_response(
    body: &str,
) -> Result<Response<Body>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("content-type", "text/plain")
        .body(Body::from(body.to_string()))
        .unwrap())
}

pub fn create_error_response(
    status: StatusCode,
    message: String,
) -> Result<Response<Body>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Response::builder()
        .status(status)
        .body(message.into())
        .unwrap())
}
