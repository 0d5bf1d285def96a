//! Fetching daily rate documents from the remote source.
//!
//! [`RateSource`] is the seam the pipeline pulls documents through;
//! [`HttpRateSource`] is the blocking HTTP implementation used in production.
//! One request per date, no retries.
use chrono::NaiveDate;
use log::{debug, error};
use reqwest::blocking::{Client, Request};

use crate::config::Config;
use crate::dates::format_query_date;
use crate::error::RatesError;
use crate::result::Result;

/// Name of the query parameter carrying the requested date.
pub const DATE_PARAM: &str = "date_req";

/// Anything that can produce the raw rates document for a date.
pub trait RateSource {
    /// Returns the raw document body published for `date`.
    fn fetch(&self, date: NaiveDate) -> Result<String>;
}

/// Blocking HTTP client for the daily rates endpoint.
pub struct HttpRateSource {
    client: Client,
    base_url: String,
}

impl HttpRateSource {
    /// Builds a client for `config.base_url` honouring `config.timeout`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Builds the GET request for `date` without sending it.
    pub fn request(&self, date: NaiveDate) -> Result<Request> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&[(DATE_PARAM, format_query_date(date))])
            .build()?;
        Ok(request)
    }
}

impl RateSource for HttpRateSource {
    fn fetch(&self, date: NaiveDate) -> Result<String> {
        let request = self.request(date)?;
        let url = request.url().to_string();
        debug!("GET {}", url);

        let response = self
            .client
            .execute(request)
            .map_err(|e| classify(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            error!("Rates source answered {} for {}", status, url);
            return Err(RatesError::Status {
                url,
                status: status.as_u16(),
            });
        }

        // `text()` decodes using the charset from Content-Type (windows-1251 for CBR).
        response.text().map_err(|e| classify(e, &url))
    }
}

/// Splits transport failures into connectivity problems and everything else.
fn classify(err: reqwest::Error, url: &str) -> RatesError {
    if err.is_timeout() {
        error!("Request timed out: {}", url);
    } else if err.is_connect() {
        error!("Connection failed: {}", url);
    } else {
        return RatesError::Http(err);
    }
    RatesError::Connectivity {
        url: String::from(url),
        source: err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::time::Duration;

    #[test]
    fn request_carries_date_as_query_parameter() {
        let source = HttpRateSource::new(&Config::default()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let request = source.request(date).unwrap();
        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://www.cbr.ru/scripts/XML_daily.asp?date_req=05%2F02%2F2024"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let source = HttpRateSource::new(&Config::new("not a url")).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert!(source.request(date).is_err());
    }

    #[test]
    fn refused_connection_is_connectivity_error() {
        // Port 1 on loopback is not expected to accept connections.
        let config = Config::new("http://127.0.0.1:1/scripts/XML_daily.asp")
            .with_timeout(Duration::from_secs(5));
        let source = HttpRateSource::new(&config).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let err = source.fetch(date).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connectivity);
    }
}
