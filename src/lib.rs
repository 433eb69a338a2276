#![deny(missing_docs)]

//! # Students API
//!
//! A serverless create/read/delete backend for student records, backed by an
//! Amazon DynamoDB table and fronted by an API Gateway HTTP route.
//!
//! ## Overview
//!
//! Each invocation handles exactly one HTTP request against the `/student`
//! route:
//! - `POST` writes (or fully replaces) the record in the submitted JSON body
//! - `GET` looks up a record by the `id` query parameter
//! - `DELETE` removes a record by the `id` query parameter
//!
//! The handler keeps no state between invocations: the DynamoDB table named
//! by the `TABLE_NAME` environment variable is the sole owner of all records,
//! and the client handle is built once per process and shared across
//! concurrent invocations.
//!
//! ## Quick example
//!
//! ```no_run
//! use lambda_http::{Error, run, service_fn};
//! use students_api::{handler, store};
//!
//! # async fn example() -> Result<(), Error> {
//! let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let client = aws_sdk_dynamodb::Client::new(&config);
//! let table = store::StudentTable::new(client, "students");
//! run(service_fn(|event| handler::function_handler(&table, event))).await
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@error`] - failure kinds and their HTTP status mapping
//! - [`mod@handler`] - per-request dispatch on the HTTP method
//! - [`mod@store`] - the backing-table seam and its DynamoDB implementation
//! - [`mod@student`] - the record type and its serialized forms

/// Failure kinds and their mapping onto HTTP status codes.
pub mod error;

/// Request dispatch: one HTTP request in, one HTTP response out.
pub mod handler;

/// Access to the backing table.
pub mod store;

/// The student record and its serialized forms.
pub mod student;

pub use error::Error;
