//! CRM table definitions and DDL generation.
//!
//! `accounts` is the root; every other table carries a foreign key to it and
//! `opportunities` additionally points back at the lead it came from.

use std::fmt;

/// One of the five CRM tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrmTable {
    Accounts,
    Leads,
    Opportunities,
    Interactions,
    Orders,
}

impl CrmTable {
    /// All tables, in drop order.
    pub const ALL: [CrmTable; 5] = [
        CrmTable::Accounts,
        CrmTable::Leads,
        CrmTable::Opportunities,
        CrmTable::Interactions,
        CrmTable::Orders,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CrmTable::Accounts => "accounts",
            CrmTable::Leads => "leads",
            CrmTable::Opportunities => "opportunities",
            CrmTable::Interactions => "interactions",
            CrmTable::Orders => "orders",
        }
    }

    /// Look a table up by its SQL name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Primary key column.
    pub fn id_column(self) -> &'static str {
        match self {
            CrmTable::Accounts => "Account_ID",
            CrmTable::Leads => "Lead_ID",
            CrmTable::Opportunities => "Opportunity_ID",
            CrmTable::Interactions => "Interaction_ID",
            CrmTable::Orders => "Order_ID",
        }
    }

    /// Column definitions, then table constraints.
    fn body(self) -> &'static [&'static str] {
        match self {
            CrmTable::Accounts => &[
                "Account_ID INTEGER PRIMARY KEY",
                "Name TEXT NOT NULL",
                "CreditOnHold INTEGER NOT NULL",
                "FollowEmail BOOLEAN NOT NULL",
                "Description TEXT NOT NULL",
                "Address TEXT NOT NULL",
            ],
            CrmTable::Leads => &[
                "Lead_ID INTEGER PRIMARY KEY",
                "Account_ID INTEGER NOT NULL",
                "Date_Generated DATETIME NOT NULL",
                "Email TEXT NOT NULL",
                "FOREIGN KEY (Account_ID) REFERENCES accounts (Account_ID)",
            ],
            CrmTable::Opportunities => &[
                "Opportunity_ID INTEGER PRIMARY KEY",
                "Account_ID INTEGER NOT NULL",
                "Date_Created DATETIME NOT NULL",
                "Converted_From INTEGER",
                "Opportunity_Size INTEGER NOT NULL",
                "FOREIGN KEY (Account_ID) REFERENCES accounts (Account_ID)",
                "FOREIGN KEY (Converted_From) REFERENCES leads (Lead_ID)",
            ],
            CrmTable::Interactions => &[
                "Interaction_ID INTEGER PRIMARY KEY",
                "Account_ID INTEGER NOT NULL",
                "Date DATETIME NOT NULL",
                "Description TEXT NOT NULL",
                "FOREIGN KEY (Account_ID) REFERENCES accounts (Account_ID)",
            ],
            CrmTable::Orders => &[
                "Order_ID INTEGER PRIMARY KEY",
                "Account_ID INTEGER NOT NULL",
                "Date DATETIME NOT NULL",
                "Amount REAL NOT NULL",
                "FOREIGN KEY (Account_ID) REFERENCES accounts (Account_ID)",
            ],
        }
    }
}

impl fmt::Display for CrmTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate the idempotent CREATE TABLE statement for a table.
pub fn generate_create_table(table: CrmTable) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        table.name(),
        table.body().join(",\n    ")
    )
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table: CrmTable) -> String {
    format!("DROP TABLE IF EXISTS {}", table.name())
}
