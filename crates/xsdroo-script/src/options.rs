use std::{fmt, str::FromStr};
use xsdroo_core::{err, Error};

/// Settings that shape the generated scripts without affecting the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Database the persistence layer is configured for.
    pub database: Database,

    /// Entities manage their own persistence when `true`. Otherwise a
    /// repository is generated for each entity.
    pub active_record: bool,

    pub web: WebOptions,

    /// Generate a selenium test per entity.
    pub tests: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebOptions {
    pub enabled: bool,

    /// Only generate the JSON controllers, not the full MVC web tier.
    pub json_only: bool,
}

/// Databases the persistence setup command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Database {
    DatabaseDotCom,
    Db2_400,
    Db2ExpressC,
    DerbyClient,
    DerbyEmbedded,
    Firebird,
    GoogleAppEngine,
    #[default]
    H2InMemory,
    HypersonicInMemory,
    HypersonicPersistent,
    Mssql,
    Mysql,
    Oracle,
    Postgres,
    Sybase,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            database: Database::default(),
            active_record: false,
            web: WebOptions::default(),
            tests: true,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn active_record(mut self, active_record: bool) -> Self {
        self.active_record = active_record;
        self
    }

    pub fn web(mut self, web: WebOptions) -> Self {
        self.web = web;
        self
    }

    pub fn tests(mut self, tests: bool) -> Self {
        self.tests = tests;
        self
    }
}

impl Default for WebOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            json_only: true,
        }
    }
}

impl WebOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// The JSON controllers plus the full MVC web tier.
    pub fn full() -> Self {
        Self {
            enabled: true,
            json_only: false,
        }
    }
}

impl Database {
    pub const ALL: [Database; 15] = [
        Database::DatabaseDotCom,
        Database::Db2_400,
        Database::Db2ExpressC,
        Database::DerbyClient,
        Database::DerbyEmbedded,
        Database::Firebird,
        Database::GoogleAppEngine,
        Database::H2InMemory,
        Database::HypersonicInMemory,
        Database::HypersonicPersistent,
        Database::Mssql,
        Database::Mysql,
        Database::Oracle,
        Database::Postgres,
        Database::Sybase,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Database::DatabaseDotCom => "DATABASE_DOT_COM",
            Database::Db2_400 => "DB2_400",
            Database::Db2ExpressC => "DB2_EXPRESS_C",
            Database::DerbyClient => "DERBY_CLIENT",
            Database::DerbyEmbedded => "DERBY_EMBEDDED",
            Database::Firebird => "FIREBIRD",
            Database::GoogleAppEngine => "GOOGLE_APP_ENGINE",
            Database::H2InMemory => "H2_IN_MEMORY",
            Database::HypersonicInMemory => "HYPERSONIC_IN_MEMORY",
            Database::HypersonicPersistent => "HYPERSONIC_PERSISTENT",
            Database::Mssql => "MSSQL",
            Database::Mysql => "MYSQL",
            Database::Oracle => "ORACLE",
            Database::Postgres => "POSTGRES",
            Database::Sybase => "SYBASE",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = Error;

    /// Parses a database name, ignoring case and treating `-` as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");

        Database::ALL
            .into_iter()
            .find(|db| db.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                let valid: Vec<_> = Database::ALL.iter().map(|db| db.as_str()).collect();
                err!("unknown database `{s}`; valid options are {}", valid.join(", "))
            })
    }
}
