mod callback;
mod errors;
mod handler;
mod model;
mod ssm;

use crate::handler::provide_secret;
use crate::model::ResourceRequest;
use crate::ssm::SsmParameterStore;
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};

async fn function_handler(
    store: &SsmParameterStore,
    http: &reqwest::Client,
    event: LambdaEvent<ResourceRequest>,
) -> Result<(), Error> {
    provide_secret(store, http, &event.payload).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let store = SsmParameterStore;
    let http = reqwest::Client::new();

    run(service_fn(|event| function_handler(&store, &http, event))).await
}
