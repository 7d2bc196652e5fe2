use lambda_runtime::{service_fn, Error, LambdaEvent};
use private_api_core::contract::ApiGatewayResponse;
use private_api_lambda::handlers::acknowledge::handle_invocation;
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_invocation(event.payload, &event.context.request_id))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
