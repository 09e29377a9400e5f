// Lambda bootstrap entry point for the summarize function.

use lambda_runtime::{Error, run, service_fn};
use url_summarizer::api::handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    url_summarizer::setup_logging();
    run(service_fn(handler)).await
}
