pub mod matches {
    /// Cron expression for the bulk match sync
    /// Runs every hour at the top of the hour
    pub const CRON_EXPRESSION: &str = "0 0 * * * *";
}

pub mod full_sync {
    /// Cron expression for the full sync of every kind
    /// Runs daily at midnight UTC
    pub const CRON_EXPRESSION: &str = "0 0 0 * * *";
}
