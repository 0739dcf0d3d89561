include!("../../lib.rs");
use axum::{
    routing::get,
    Router,
};
use lambda_http::{run, Error};
use crate::utils::ddb::setup_tracing;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::catalog::controller::{add_book, comment_book, find_book_by_id, list_books, remove_all_books, remove_book};

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/images-test.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let (config, store) = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096"); // 200MB
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        (Configuration::new("dev"), RepositoryStore::LocalDynamoDB)
    } else {
        (Configuration::new("prod"), RepositoryStore::DynamoDB)
    };

    // the store client and catalog service are acquired once at startup,
    // request handlers only reach them through AppState
    tracing::info!("starting catalog api in {} mode against {:?}", config.env, store);
    let catalog = catalog::factory::create_catalog_service(&config, store).await;
    let state = AppState::new(config, catalog);

    let app = Router::new()
        .route("/api/books",
               get(list_books).post(add_book).delete(remove_all_books))
        .route("/api/books/:id",
               get(find_book_by_id).post(comment_book).delete(remove_book))
        .with_state(state);

    run(app).await
}
