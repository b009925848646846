use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Copy the schema and data of every source table into MariaDB
    Migrate {
        /// Path to a .env file with PGSQL_* / MARIADB_* settings
        #[arg(long, default_value = ".env")]
        env_file: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,

        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check connectivity to a database before migrating
    TestConn {
        /// Connection kind: pg | postgres | mysql | mariadb
        #[arg(long)]
        format: String,

        /// Connection URL
        #[arg(long)]
        conn_str: String,
    },
}
