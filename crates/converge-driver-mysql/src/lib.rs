mod value;
pub(crate) use value::Value;

use converge_core::{async_trait, bail, driver, Error, Result};

use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Pool,
};
use url::Url;

#[derive(Debug)]
pub struct MySql {
    pool: Pool,
}

impl MySql {
    pub fn new(url: impl Into<String>) -> Result<MySql> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "mysql" {
            bail!("connection url scheme must be `mysql`; url={}", url);
        }

        if url.host_str().is_none() {
            bail!("connection url is missing a host; url={}", url);
        }

        if url.path().trim_start_matches('/').is_empty() {
            bail!("connection url does not name a database; url={}", url);
        }

        let opts = mysql_async::Opts::from_url(url.as_ref()).map_err(Error::driver)?;
        let pool = Pool::new(opts);
        Ok(MySql { pool })
    }

    /// Checks a connection out of the pool.
    pub async fn connect(&self) -> Result<Box<dyn driver::Connection>> {
        let conn = self.pool.get_conn().await.map_err(Error::driver)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

impl From<Pool> for MySql {
    fn from(pool: Pool) -> MySql {
        MySql { pool }
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Connection {
        Connection { conn }
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Connection {
        Connection { conn }
    }
}

#[async_trait]
impl driver::Connection for Connection {
    async fn execute(&mut self, sql: &str, params: Vec<driver::Value>) -> Result<u64> {
        let result = self
            .conn
            .exec_iter(sql, to_args(params))
            .await
            .map_err(Error::driver)?;
        Ok(result.affected_rows())
    }

    async fn fetch_one(
        &mut self,
        sql: &str,
        params: Vec<driver::Value>,
    ) -> Result<Option<driver::Row>> {
        let row: Option<mysql_async::Row> = self
            .conn
            .exec_first(sql, to_args(params))
            .await
            .map_err(Error::driver)?;
        row.map(to_row).transpose()
    }

    async fn fetch_all(
        &mut self,
        sql: &str,
        params: Vec<driver::Value>,
    ) -> Result<Vec<driver::Row>> {
        let rows: Vec<mysql_async::Row> = self
            .conn
            .exec(sql, to_args(params))
            .await
            .map_err(Error::driver)?;
        rows.into_iter().map(to_row).collect()
    }
}

fn to_args(params: Vec<driver::Value>) -> Vec<mysql_async::Value> {
    params
        .into_iter()
        .map(|param| Value::from(param).to_value())
        .collect()
}

fn to_row(row: mysql_async::Row) -> Result<driver::Row> {
    let columns = row.columns();
    let mut out = driver::Row::new();
    for (column, value) in columns.iter().zip(row.unwrap()) {
        out.push(
            column.name_str().into_owned(),
            Value::from_sql(value)?.into_inner(),
        );
    }
    Ok(out)
}
