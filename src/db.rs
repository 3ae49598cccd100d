use crate::error::{ApiError, ApiResult};
use crate::models::customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
use rusqlite::{params, Connection, OptionalExtension, ToSql};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Persistence adapter over the single `customers` table.
///
/// Holds the SQLite connection behind a `Mutex`; each operation locks the
/// connection for the duration of exactly one statement and never across an
/// await point. Handed to the router as an `Arc<Database>` at startup.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> ApiResult<Self> {
        let conn = Connection::open(path)?;
        let db = Database {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// One-time schema creation. An existing incompatible table is left
    /// untouched; there is no migration step.
    fn init_schema(&self) -> ApiResult<()> {
        let conn = self.conn.lock().unwrap();

        // AUTOINCREMENT keeps rowids monotonic, so ids are never reused
        // after a delete.
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age  INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    /// Insert a new customer and return the full record with its assigned id.
    pub fn create_customer(&self, request: &CreateCustomerRequest) -> ApiResult<Customer> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO customers (name, age) VALUES (?1, ?2)",
            params![request.name, request.age],
        )?;

        let id = conn.last_insert_rowid() as u64;
        info!("Created customer with id: {}", id);

        Ok(Customer {
            id,
            name: request.name.clone(),
            age: request.age,
        })
    }

    pub fn get_customer(&self, id: u64) -> ApiResult<Customer> {
        let conn = self.conn.lock().unwrap();

        let customer = conn
            .query_row(
                "SELECT id, name, age FROM customers WHERE id = ?1",
                params![id as i64],
                |row| {
                    Ok(Customer {
                        id: row.get::<_, i64>(0)? as u64,
                        name: row.get(1)?,
                        age: row.get(2)?,
                    })
                },
            )
            .optional()?;

        customer.ok_or_else(ApiError::record_not_found)
    }

    /// Overwrite the fields present in the request. A zero affected-row
    /// count is the sole not-found signal.
    pub fn update_customer(&self, id: u64, request: &UpdateCustomerRequest) -> ApiResult<()> {
        request.validate().map_err(ApiError::Validation)?;

        let conn = self.conn.lock().unwrap();
        let id = id as i64;

        // Build the SET clause from exactly the provided fields. Provided
        // values always overwrite, including 0 and the empty string.
        let mut assignments = Vec::new();
        let mut params: Vec<&dyn ToSql> = Vec::new();

        if let Some(ref name) = request.name {
            assignments.push(format!("name = ?{}", params.len() + 1));
            params.push(name);
        }

        if let Some(ref age) = request.age {
            assignments.push(format!("age = ?{}", params.len() + 1));
            params.push(age);
        }

        params.push(&id);

        let query = format!(
            "UPDATE customers SET {} WHERE id = ?{}",
            assignments.join(", "),
            params.len()
        );

        let affected = conn.execute(&query, params.as_slice())?;

        if affected == 0 {
            return Err(ApiError::record_not_found());
        }

        info!("Updated customer with id: {}", id);
        Ok(())
    }

    /// Delete by id. The affected-row count is deliberately ignored:
    /// deleting an absent row is reported as success.
    pub fn delete_customer(&self, id: u64) -> ApiResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute("DELETE FROM customers WHERE id = ?1", params![id as i64])?;

        info!("Deleted customer with id: {}", id);
        Ok(())
    }

    /// Insert the two fixed sample records. Two independent statements, no
    /// transaction spanning them.
    pub fn seed_customers(&self) -> ApiResult<()> {
        let conn = self.conn.lock().unwrap();

        for (name, age) in [("Kitsada ", 30i64), ("suparut", 25i64)] {
            conn.execute(
                "INSERT INTO customers (name, age) VALUES (?1, ?2)",
                params![name, age],
            )?;
        }

        info!("Seeded sample customers");
        Ok(())
    }
}
