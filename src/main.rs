use lambda_http::{Error, run, service_fn};
use students_api::{handler, store};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_http::tracing::init_default_subscriber();

    let table_name = env::var("TABLE_NAME")?;
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&config);
    let table = store::StudentTable::new(client, table_name);

    run(service_fn(|event| handler::function_handler(&table, event))).await
}
