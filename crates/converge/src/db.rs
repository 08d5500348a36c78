use converge_core::{Connection, Result};

/// Connects to the database named by `url`.
///
/// The URL scheme selects the driver; only `mysql` is built in.
#[cfg(feature = "mysql")]
pub async fn connect(url: &str) -> Result<Box<dyn Connection>> {
    converge_driver_mysql::MySql::new(url)?.connect().await
}

#[cfg(not(feature = "mysql"))]
pub async fn connect(url: &str) -> Result<Box<dyn Connection>> {
    let _ = url;
    Err(converge_core::err!("`mysql` feature not enabled"))
}
