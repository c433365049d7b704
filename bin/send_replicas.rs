//! Variant of the send load test that rotates across the replica gateways.

use std::time::Duration;

use goose::prelude::*;

use biblioteca_load::requests::random_request_line;
use biblioteca_load::targets::{random_replica_port, replica_label, replica_url};

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    let _goose_metrics = GooseAttack::initialize()?
        .register_scenario(
            scenario!("BibliotecaUser")
                // Each user waits 0.1 to 1 second between requests
                .set_wait_time(Duration::from_millis(100), Duration::from_secs(1))?
                .register_transaction(transaction!(send_operation_rotating)),
        )
        // Goose requires a host even though every request carries its own URL
        .set_default(GooseDefault::Host, "http://localhost:8081")?
        .set_default(GooseDefault::Users, 100)?
        .set_default(GooseDefault::StartupTime, 5)?
        .set_default(GooseDefault::RunTime, 105)?
        .execute()
        .await?;

    Ok(())
}

async fn send_operation_rotating(user: &mut GooseUser) -> TransactionResult {
    let line = random_request_line();
    let port = random_replica_port();
    let url = replica_url(port);
    let label = replica_label(port);

    let request_builder = user
        .get_request_builder(&GooseMethod::Post, &url)?
        .body(line);

    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path(url.as_str())
        .name(label.as_str())
        .set_request_builder(request_builder)
        .build();

    let _response = user.request(goose_request).await?;

    Ok(())
}
