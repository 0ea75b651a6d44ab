//! The Data Product Exchange client.
//!
//! [`DataProductExchange`] exposes one async method per API operation. Each
//! method validates its options, builds the request, sends it through the
//! shared [`HttpClient`] and decodes the response into a typed
//! [`DetailedResponse`].
//!
//! # Example
//!
//! ```rust,ignore
//! use data_product_exchange::{Authenticator, BearerToken, DataProductExchange, ServiceConfig};
//! use data_product_exchange::rest::resources::v1::GetDataProductVersionOptions;
//!
//! let config = ServiceConfig::builder()
//!     .authenticator(Authenticator::bearer(BearerToken::new("token")?))
//!     .max_retries(3)
//!     .build()?;
//! let service = DataProductExchange::new(config)?;
//!
//! let response = service
//!     .get_data_product_version(&GetDataProductVersionOptions::new("dpv-1"))
//!     .await?;
//! println!("{:?}", response.result().and_then(|v| v.name.as_deref()));
//! ```

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{
    DataType, HttpClient, HttpError, HttpRequest, HttpRequestBuilder, HttpResponse,
};
use crate::config::{ServiceConfig, ServiceUrl, DEFAULT_SERVICE_NAME};
use crate::error::ConfigError;
use crate::rest::path::{build_path, v1, ResourcePath};
use crate::rest::resources::v1::{
    CreateDataProductVersionOptions, DataProduct, DataProductCollection, DataProductVersion,
    DataProductVersionCollection, DeleteDataProductVersionOptions,
    DeliverDataProductVersionOptions, DeliveryResource, GetDataProductOptions,
    GetDataProductVersionOptions, GetInitializeStatusOptions, InitializeOptions,
    InitializeResource, ListDataProductVersionsOptions, ListDataProductsOptions,
    UpdateDataProductVersionOptions,
};
use crate::rest::{DetailedResponse, ServiceError};

/// Client for the Data Product Exchange API.
///
/// Holds read-only configuration and a pooled HTTP client. Cloning is cheap
/// and clones share connections, so one instance can serve many tasks.
#[derive(Clone, Debug)]
pub struct DataProductExchange {
    config: ServiceConfig,
    http_client: HttpClient,
}

// Verify DataProductExchange is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DataProductExchange>();
};

impl DataProductExchange {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP client cannot be created.
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(&config)?;
        tracing::debug!(
            "Created Data Product Exchange client for {} (auth: {})",
            config.service_url(),
            config.authenticator().auth_type()
        );
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Creates a client configured from `DPX_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment holds invalid values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ServiceConfig::from_env(DEFAULT_SERVICE_NAME)?)
    }

    /// Returns the configuration of this client.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns a copy of this client sending requests to another service URL.
    #[must_use]
    pub fn with_service_url(&self, service_url: ServiceUrl) -> Self {
        let http_client = self.http_client.with_base_uri(service_url.to_string());
        Self {
            config: self.config.with_service_url(service_url),
            http_client,
        }
    }

    /// Returns a copy of this client sending an additional default header.
    #[must_use]
    pub fn with_default_header(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        Self {
            config: self.config.with_default_header(key.clone(), value.clone()),
            http_client: self.http_client.with_default_header(key, value),
        }
    }

    /// Gets the status of the catalog initialization.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails or the response cannot be decoded.
    pub async fn get_initialize_status(
        &self,
        options: &GetInitializeStatusOptions,
    ) -> Result<DetailedResponse<InitializeResource>, ServiceError> {
        let path = v1::GET_INITIALIZE_STATUS;
        let mut builder = self.request_builder(&path, &[], &options.headers, options.timeout);
        if let Some(query) = serialize_to_query(options)? {
            builder = builder.query(query);
        }
        let response = self.send(builder).await?;
        DetailedResponse::from_http_response(response)
    }

    /// Starts initialization of the default catalog resources.
    ///
    /// The service answers `202 Accepted`; poll
    /// [`get_initialize_status`](Self::get_initialize_status) for progress.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails or the response cannot be decoded.
    pub async fn initialize(
        &self,
        options: &InitializeOptions,
    ) -> Result<DetailedResponse<InitializeResource>, ServiceError> {
        let path = v1::INITIALIZE;
        let builder = self
            .request_builder(&path, &[], &options.headers, options.timeout)
            .body(to_body(options)?)
            .body_type(DataType::Json);
        let response = self.send(builder).await?;
        DetailedResponse::from_http_response(response)
    }

    /// Gets a data product.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if the ID is empty,
    /// or another [`ServiceError`] if the request fails.
    pub async fn get_data_product(
        &self,
        options: &GetDataProductOptions,
    ) -> Result<DetailedResponse<DataProduct>, ServiceError> {
        options.validate()?;
        let path = v1::GET_DATA_PRODUCT;
        let builder = self.request_builder(
            &path,
            &[("id", options.id.as_str())],
            &options.headers,
            options.timeout,
        );
        let response = self.send(builder).await?;
        DetailedResponse::from_http_response(response)
    }

    /// Lists one page of data products.
    ///
    /// See [`DataProductsPager`](crate::rest::DataProductsPager) for iterating over all pages.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails or the response cannot be decoded.
    pub async fn list_data_products(
        &self,
        options: &ListDataProductsOptions,
    ) -> Result<DetailedResponse<DataProductCollection>, ServiceError> {
        let path = v1::LIST_DATA_PRODUCTS;
        let mut builder = self.request_builder(&path, &[], &options.headers, options.timeout);
        if let Some(query) = serialize_to_query(options)? {
            builder = builder.query(query);
        }
        let response = self.send(builder).await?;
        DetailedResponse::from_http_response(response)
    }

    /// Lists one page of data product versions.
    ///
    /// See [`DataProductVersionsPager`](crate::rest::DataProductVersionsPager) for iterating
    /// over all pages.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails or the response cannot be decoded.
    pub async fn list_data_product_versions(
        &self,
        options: &ListDataProductVersionsOptions,
    ) -> Result<DetailedResponse<DataProductVersionCollection>, ServiceError> {
        let path = v1::LIST_DATA_PRODUCT_VERSIONS;
        let mut builder = self.request_builder(&path, &[], &options.headers, options.timeout);
        if let Some(query) = serialize_to_query(options)? {
            builder = builder.query(query);
        }
        let response = self.send(builder).await?;
        DetailedResponse::from_http_response(response)
    }

    /// Creates a new data product version.
    ///
    /// The request body holds exactly the fields that are set on `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if the container is
    /// not set, or another [`ServiceError`] if the request fails.
    pub async fn create_data_product_version(
        &self,
        options: &CreateDataProductVersionOptions,
    ) -> Result<DetailedResponse<DataProductVersion>, ServiceError> {
        options.validate()?;
        let path = v1::CREATE_DATA_PRODUCT_VERSION;
        let builder = self
            .request_builder(&path, &[], &options.headers, options.timeout)
            .body(to_body(options)?)
            .body_type(DataType::Json);
        let response = self.send(builder).await?;
        DetailedResponse::from_http_response(response)
    }

    /// Gets a data product version.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if the ID is empty,
    /// or another [`ServiceError`] if the request fails.
    pub async fn get_data_product_version(
        &self,
        options: &GetDataProductVersionOptions,
    ) -> Result<DetailedResponse<DataProductVersion>, ServiceError> {
        options.validate()?;
        let path = v1::GET_DATA_PRODUCT_VERSION;
        let builder = self.request_builder(
            &path,
            &[("id", options.id.as_str())],
            &options.headers,
            options.timeout,
        );
        let response = self.send(builder).await?;
        DetailedResponse::from_http_response(response)
    }

    /// Updates a data product version with a JSON Patch.
    ///
    /// The patch array is sent as the body with
    /// `Content-Type: application/json-patch+json`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if the ID or the
    /// patch is empty, or another [`ServiceError`] if the request fails.
    pub async fn update_data_product_version(
        &self,
        options: &UpdateDataProductVersionOptions,
    ) -> Result<DetailedResponse<DataProductVersion>, ServiceError> {
        options.validate()?;
        let path = v1::UPDATE_DATA_PRODUCT_VERSION;
        let builder = self
            .request_builder(
                &path,
                &[("id", options.id.as_str())],
                &options.headers,
                options.timeout,
            )
            .body(to_body(&options.json_patch_instructions)?)
            .body_type(DataType::JsonPatch);
        let response = self.send(builder).await?;
        DetailedResponse::from_http_response(response)
    }

    /// Starts delivery of a data product version.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if the ID is empty,
    /// or another [`ServiceError`] if the request fails.
    pub async fn deliver_data_product_version(
        &self,
        options: &DeliverDataProductVersionOptions,
    ) -> Result<DetailedResponse<DeliveryResource>, ServiceError> {
        options.validate()?;
        let path = v1::DELIVER_DATA_PRODUCT_VERSION;
        let builder = self
            .request_builder(
                &path,
                &[("id", options.id.as_str())],
                &options.headers,
                options.timeout,
            )
            .body(to_body(options)?)
            .body_type(DataType::Json);
        let response = self.send(builder).await?;
        DetailedResponse::from_http_response(response)
    }

    /// Deletes a data product version.
    ///
    /// Only draft versions can be deleted; the service rejects anything else.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if the ID is empty,
    /// or another [`ServiceError`] if the request fails.
    pub async fn delete_data_product_version(
        &self,
        options: &DeleteDataProductVersionOptions,
    ) -> Result<DetailedResponse<()>, ServiceError> {
        options.validate()?;
        let path = v1::DELETE_DATA_PRODUCT_VERSION;
        let builder = self.request_builder(
            &path,
            &[("id", options.id.as_str())],
            &options.headers,
            options.timeout,
        );
        let response = self.send(builder).await?;
        Ok(DetailedResponse::without_result(response))
    }

    /// Starts a request for `path` with the SDK and caller headers applied.
    fn request_builder(
        &self,
        path: &ResourcePath,
        path_params: &[(&str, &str)],
        headers: &HashMap<String, String>,
        timeout: Option<Duration>,
    ) -> HttpRequestBuilder {
        let params: HashMap<&str, &str> = path_params.iter().copied().collect();
        let mut builder = HttpRequest::builder(path.http_method, build_path(path.template, &params))
            .header("X-SDK-Analytics", path.analytics_header())
            .tries(self.config.max_retries().saturating_add(1))
            .timeout(timeout.or_else(|| self.config.timeout()));

        for (key, value) in headers {
            builder = builder.header(key.clone(), value.clone());
        }

        builder
    }

    async fn send(&self, builder: HttpRequestBuilder) -> Result<HttpResponse, ServiceError> {
        let request = builder.build().map_err(HttpError::from)?;
        Ok(self.http_client.request(request).await?)
    }
}

/// Serializes options into a request body.
fn to_body<T: Serialize + ?Sized>(options: &T) -> Result<Value, ServiceError> {
    serde_json::to_value(options).map_err(ServiceError::Serialize)
}

/// Serializes options into query parameters.
///
/// Unset fields are skipped; arrays become comma-separated values.
/// Returns `None` when no parameter is set.
fn serialize_to_query<T: Serialize>(
    options: &T,
) -> Result<Option<HashMap<String, String>>, ServiceError> {
    let value = serde_json::to_value(options).map_err(ServiceError::Serialize)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(if query.is_empty() { None } else { Some(query) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Authenticator;
    use crate::rest::resources::v1::DataProductVersionState;

    fn service() -> DataProductExchange {
        let config = ServiceConfig::builder()
            .authenticator(Authenticator::NoAuth)
            .max_retries(2)
            .build()
            .unwrap();
        DataProductExchange::new(config).unwrap()
    }

    #[test]
    fn test_serialize_to_query_skips_unset_fields() {
        let options = ListDataProductVersionsOptions::new()
            .state(DataProductVersionState::Draft)
            .limit(10)
            .header("X-Ignored", "1");

        let query = serialize_to_query(&options).unwrap().unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("state"), Some(&"draft".to_string()));
        assert_eq!(query.get("limit"), Some(&"10".to_string()));
    }

    #[test]
    fn test_serialize_to_query_empty_is_none() {
        assert!(serialize_to_query(&ListDataProductsOptions::new())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_request_builder_applies_headers_tries_and_path() {
        let service = service();
        let mut headers = HashMap::new();
        headers.insert("X-Custom".to_string(), "yes".to_string());

        let request = service
            .request_builder(
                &v1::GET_DATA_PRODUCT_VERSION,
                &[("id", "dpv 1")],
                &headers,
                Some(Duration::from_secs(3)),
            )
            .build()
            .unwrap();

        assert_eq!(request.path, "data_product_versions/dpv%201");
        assert_eq!(request.tries, 3);
        assert_eq!(request.timeout, Some(Duration::from_secs(3)));
        let extra = request.extra_headers.unwrap();
        assert_eq!(extra.get("X-Custom"), Some(&"yes".to_string()));
        assert!(extra
            .get("X-SDK-Analytics")
            .unwrap()
            .ends_with("operation_id=GetDataProductVersion"));
    }

    #[test]
    fn test_request_builder_falls_back_to_config_timeout() {
        let config = ServiceConfig::builder()
            .authenticator(Authenticator::NoAuth)
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        let service = DataProductExchange::new(config).unwrap();

        let request = service
            .request_builder(&v1::LIST_DATA_PRODUCTS, &[], &HashMap::new(), None)
            .build()
            .unwrap();
        assert_eq!(request.timeout, Some(Duration::from_secs(30)));
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_with_service_url_is_clone_on_demand() {
        let service = service();
        let other = service.with_service_url(ServiceUrl::new("http://localhost:8080/v1").unwrap());

        assert_eq!(other.config().service_url().as_ref(), "http://localhost:8080/v1");
        assert_ne!(
            service.config().service_url().as_ref(),
            other.config().service_url().as_ref()
        );
    }

    #[test]
    fn test_with_default_header() {
        let service = service().with_default_header("X-Team", "catalog");
        assert_eq!(
            service.config().default_headers().get("X-Team"),
            Some(&"catalog".to_string())
        );
    }

    #[tokio::test]
    async fn test_validation_fails_before_sending() {
        let service = service();
        let error = service
            .get_data_product(&GetDataProductOptions::new(""))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            ServiceError::MissingRequiredParameter { field: "id", .. }
        ));
    }
}
