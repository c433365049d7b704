use std::convert::Infallible;
use std::error::Error;
use std::net::SocketAddr;

use dotenv::dotenv;
use hyper::service::{make_service_fn, service_fn};
use hyper::Server;
use log::info;

use biblioteca_load::routes::handle_request;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file
    dotenv().ok();
    env_logger::init();

    // Stand-in for the library gateway; listens where the real one would
    let port = std::env::var("GATEWAY_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    // Bind to a server:port
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let make_svc = make_service_fn(|_conn| async {
        Ok::<_, Infallible>(service_fn(handle_request))
    });

    // Start server
    info!("Listening on http://{}", addr);
    Server::bind(&addr).serve(make_svc).await?;

    Ok(())
}
