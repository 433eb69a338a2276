//! Access to the backing student table.
//!
//! The dispatcher is written against the [`StudentStore`] seam; production
//! code plugs in [`StudentTable`], which performs exactly one DynamoDB call
//! per operation. All mutation is single-item, so the table's per-item
//! atomicity is the only consistency guarantee.

use crate::{error, student};

use aws_sdk_dynamodb::Client;

/// Operations the dispatcher needs from the backing table.
#[allow(async_fn_in_trait)]
pub trait StudentStore {
    /// Write the full record, replacing any existing record under its id.
    async fn save(&self, student: &student::Student) -> error::Result<()>;

    /// Point lookup by id.
    ///
    /// A miss is reported as [`error::Error::NotFound`].
    async fn fetch(&self, id: &str) -> error::Result<student::Student>;

    /// Delete by id. Deleting an absent record succeeds.
    async fn remove(&self, id: &str) -> error::Result<()>;
}

/// The DynamoDB-backed student table.
///
/// Holds the process-wide client handle and the table name resolved at
/// startup; shared by reference across concurrent invocations and never
/// explicitly torn down.
///
/// ```rust,no_run
/// use students_api::store::StudentTable;
///
/// # async fn example() {
/// let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
/// let client = aws_sdk_dynamodb::Client::new(&config);
/// let table = StudentTable::new(client, "students");
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct StudentTable {
    client: Client,
    table_name: String,
}

impl StudentTable {
    /// Create a handle for the table named `table_name`.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

impl StudentStore for StudentTable {
    #[tracing::instrument(
        name = "students_api.save",
        skip(self, student),
        fields(id = %student.id),
        err
    )]
    async fn save(&self, student: &student::Student) -> error::Result<()> {
        let item = student.try_into()?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await?;
        Ok(())
    }

    #[tracing::instrument(name = "students_api.fetch", skip(self), err)]
    async fn fetch(&self, id: &str) -> error::Result<student::Student> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(student::key_for(id)))
            .send()
            .await?;
        match output.item {
            Some(item) => item.try_into(),
            None => Err(error::Error::NotFound { id: id.to_string() }),
        }
    }

    #[tracing::instrument(name = "students_api.remove", skip(self), err)]
    async fn remove(&self, id: &str) -> error::Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(student::key_for(id)))
            .send()
            .await?;
        Ok(())
    }
}
