//! Row INSERT logic for SQLite population.

use crate::error::SqlitePopulatorError;
use crate::schema::CrmTable;
use rusqlite::{params, Connection, Statement};
use seed_generator::{AccountRow, InteractionRow, LeadRow, OpportunityRow, OrderRow};
use tracing::debug;

/// A generated row that knows how to insert itself.
pub trait InsertRow {
    /// Table the row belongs to.
    const TABLE: CrmTable;

    /// Parameterized INSERT statement.
    const SQL: &'static str;

    /// Bind this row's values and run the prepared statement.
    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize>;
}

impl InsertRow for AccountRow {
    const TABLE: CrmTable = CrmTable::Accounts;
    const SQL: &'static str = "INSERT INTO accounts (Name, CreditOnHold, FollowEmail, Description, Address) \
         VALUES (?1, ?2, ?3, ?4, ?5)";

    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.name,
            self.credit_on_hold,
            self.follow_email,
            self.description,
            self.address
        ])
    }
}

impl InsertRow for LeadRow {
    const TABLE: CrmTable = CrmTable::Leads;
    const SQL: &'static str =
        "INSERT INTO leads (Lead_ID, Account_ID, Date_Generated, Email) VALUES (?1, ?2, ?3, ?4)";

    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.lead_id,
            self.account_id,
            self.date_generated,
            self.email
        ])
    }
}

impl InsertRow for OpportunityRow {
    const TABLE: CrmTable = CrmTable::Opportunities;
    const SQL: &'static str = "INSERT INTO opportunities (Account_ID, Date_Created, Converted_From, Opportunity_Size) \
         VALUES (?1, ?2, ?3, ?4)";

    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.account_id,
            self.date_created,
            self.converted_from,
            self.size
        ])
    }
}

impl InsertRow for InteractionRow {
    const TABLE: CrmTable = CrmTable::Interactions;
    const SQL: &'static str =
        "INSERT INTO interactions (Account_ID, Date, Description) VALUES (?1, ?2, ?3)";

    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.account_id, self.date, self.description])
    }
}

impl InsertRow for OrderRow {
    const TABLE: CrmTable = CrmTable::Orders;
    const SQL: &'static str = "INSERT INTO orders (Account_ID, Date, Amount) VALUES (?1, ?2, ?3)";

    fn execute(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![self.account_id, self.date, self.amount])
    }
}

/// Insert a single row outside of any batch.
#[cfg(test)]
pub fn insert_row<T: InsertRow>(
    conn: &Connection,
    row: &T,
) -> Result<u64, SqlitePopulatorError> {
    let mut stmt = conn.prepare_cached(T::SQL)?;
    row.execute(&mut stmt)?;
    Ok(1)
}

/// Insert a batch of rows with one prepared statement.
///
/// Runs inside whatever transaction `conn` belongs to; committing is up to
/// the caller.
pub fn insert_batch<T: InsertRow>(
    conn: &Connection,
    rows: &[T],
) -> Result<u64, SqlitePopulatorError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let mut stmt = conn.prepare_cached(T::SQL)?;
    for row in rows {
        row.execute(&mut stmt)?;
    }

    debug!("Inserted {} rows into {}", rows.len(), T::TABLE);
    Ok(rows.len() as u64)
}

/// Read every primary key of `table`, in ascending order.
pub fn select_ids(
    conn: &Connection,
    table: CrmTable,
) -> Result<Vec<i64>, SqlitePopulatorError> {
    let sql = format!(
        "SELECT {id} FROM {table} ORDER BY {id}",
        id = table.id_column(),
        table = table.name()
    );
    let mut stmt = conn.prepare(&sql)?;
    let ids = stmt
        .query_map([], |row| row.get::<_, i64>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::generate_create_table;
    use chrono::NaiveDate;

    fn conn_with(tables: &[CrmTable]) -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        for table in tables {
            conn.execute(&generate_create_table(*table), []).unwrap();
        }
        conn
    }

    fn account(name: &str) -> AccountRow {
        AccountRow {
            name: name.to_string(),
            credit_on_hold: 42,
            follow_email: true,
            description: "desc".to_string(),
            address: "1 Main Street, Springfield".to_string(),
        }
    }

    #[test]
    fn test_insert_batch_assigns_ids() {
        let conn = conn_with(&[CrmTable::Accounts]);
        let rows = vec![account("Acme"), account("Globex"), account("Initech")];

        let inserted = insert_batch(&conn, &rows).unwrap();

        assert_eq!(inserted, 3);
        assert_eq!(select_ids(&conn, CrmTable::Accounts).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_empty_batch() {
        let conn = conn_with(&[CrmTable::Accounts]);
        let rows: Vec<AccountRow> = Vec::new();
        assert_eq!(insert_batch(&conn, &rows).unwrap(), 0);
    }

    #[test]
    fn test_insert_lead_roundtrips_date() {
        let conn = conn_with(&[CrmTable::Accounts, CrmTable::Leads]);
        insert_row(&conn, &account("Acme")).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        let lead = LeadRow {
            lead_id: 7,
            account_id: 1,
            date_generated: date,
            email: "someone@example.com".to_string(),
        };
        insert_row(&conn, &lead).unwrap();

        let (id, stored): (i64, chrono::NaiveDateTime) = conn
            .query_row("SELECT Lead_ID, Date_Generated FROM leads", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(id, 7);
        assert_eq!(stored, date);
    }

    #[test]
    fn test_duplicate_lead_id_fails() {
        let conn = conn_with(&[CrmTable::Accounts, CrmTable::Leads]);
        insert_row(&conn, &account("Acme")).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let lead = LeadRow {
            lead_id: 1,
            account_id: 1,
            date_generated: date,
            email: "a@example.com".to_string(),
        };

        insert_row(&conn, &lead).unwrap();
        let result = insert_row(&conn, &lead);
        assert!(matches!(result, Err(SqlitePopulatorError::Sqlite(_))));
    }

    #[test]
    fn test_insert_opportunity_without_lead() {
        let conn = conn_with(&[CrmTable::Accounts, CrmTable::Leads, CrmTable::Opportunities]);
        insert_row(&conn, &account("Acme")).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let opp = OpportunityRow {
            account_id: 1,
            date_created: date,
            converted_from: None,
            size: 5_000,
        };
        insert_row(&conn, &opp).unwrap();

        let converted: Option<i64> = conn
            .query_row("SELECT Converted_From FROM opportunities", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(converted, None);
    }

    #[test]
    fn test_insert_into_missing_table_fails() {
        let conn = conn_with(&[]);
        let result = insert_row(&conn, &account("Acme"));
        assert!(matches!(result, Err(SqlitePopulatorError::Sqlite(_))));
    }
}
