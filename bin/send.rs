//! Drives the library gateway with randomized operation lines.

use std::time::Duration;

use dotenv::dotenv;
use goose::prelude::*;

use biblioteca_load::requests::{random_request_line, REQUEST_NAME};

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    // Load environment variables from .env file
    dotenv().ok();

    let host = std::env::var("BIBLIOTECA_HOST")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    let _goose_metrics = GooseAttack::initialize()?
        .register_scenario(
            scenario!("BibliotecaUser")
                // Each user waits 0.1 to 1 second between requests
                .set_wait_time(Duration::from_millis(100), Duration::from_secs(1))?
                .register_transaction(transaction!(send_operation)),
        )
        .set_default(GooseDefault::Host, host.as_str())?
        .set_default(GooseDefault::Users, 100)?
        .set_default(GooseDefault::StartupTime, 5)?
        .set_default(GooseDefault::RunTime, 105)?
        .execute()
        .await?;

    Ok(())
}

async fn send_operation(user: &mut GooseUser) -> TransactionResult {
    let line = random_request_line();

    let request_builder = user
        .get_request_builder(&GooseMethod::Post, "/send")?
        .body(line);

    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path("/send")
        .name(REQUEST_NAME)
        .set_request_builder(request_builder)
        .build();

    let _response = user.request(goose_request).await?;

    Ok(())
}
