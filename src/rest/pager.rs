//! Cursor pagination over the list operations.
//!
//! The list operations return one page at a time together with an opaque
//! `next.start` cursor. A [`Pager`] owns that cursor and turns a list
//! operation into a forward-only sequence of pages:
//!
//! - [`Pager::get_next`] makes exactly one request and returns its items
//! - [`Pager::get_all`] drains the remaining pages in order
//! - [`Pager::reset`] starts over from the first page
//!
//! Once the last page (the one without a `next` cursor) has been returned,
//! [`Pager::get_next`] fails with [`ServiceError::NoMoreResults`] without
//! sending a request.
//!
//! Callers that want to drive the cursor themselves can use
//! [`PagedOptions::fetch_page`] directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use data_product_exchange::rest::{DataProductVersionsPager, ServiceError};
//! use data_product_exchange::rest::resources::v1::ListDataProductVersionsOptions;
//!
//! let options = ListDataProductVersionsOptions::new().limit(50);
//! let mut pager = DataProductVersionsPager::new(&service, options)?;
//!
//! while pager.has_next() {
//!     for version in pager.get_next().await? {
//!         println!("{:?}", version.name);
//!     }
//! }
//! ```

use crate::rest::resources::v1::{
    DataProduct, DataProductVersionSummary, ListDataProductVersionsOptions,
    ListDataProductsOptions,
};
use crate::rest::{DataProductExchange, ServiceError};

/// One page of a list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items on the page, in server order.
    pub items: Vec<T>,
    /// The cursor of the following page; `None` on the last page.
    pub next_start: Option<String>,
}

/// Options of a list operation that can be paged.
#[allow(async_fn_in_trait)]
pub trait PagedOptions: Clone {
    /// The type of the listed items.
    type Item;

    /// Returns the page cursor.
    fn page_start(&self) -> Option<&str>;

    /// Sets the page cursor.
    fn set_page_start(&mut self, start: Option<String>);

    /// Checks the options before paging starts.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the options cannot be sent.
    fn validate(&self) -> Result<(), ServiceError> {
        Ok(())
    }

    /// Fetches the page selected by the current cursor.
    ///
    /// An empty response body is treated as an empty last page.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails.
    async fn fetch_page(
        &self,
        service: &DataProductExchange,
    ) -> Result<Page<Self::Item>, ServiceError>;
}

impl PagedOptions for ListDataProductsOptions {
    type Item = DataProduct;

    fn page_start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_page_start(&mut self, start: Option<String>) {
        self.start = start;
    }

    async fn fetch_page(
        &self,
        service: &DataProductExchange,
    ) -> Result<Page<DataProduct>, ServiceError> {
        let collection = service.list_data_products(self).await?.into_result();
        Ok(collection.map_or_else(
            || Page {
                items: Vec::new(),
                next_start: None,
            },
            |collection| Page {
                items: collection.data_products,
                next_start: collection.next.map(|next| next.start),
            },
        ))
    }
}

impl PagedOptions for ListDataProductVersionsOptions {
    type Item = DataProductVersionSummary;

    fn page_start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_page_start(&mut self, start: Option<String>) {
        self.start = start;
    }

    async fn fetch_page(
        &self,
        service: &DataProductExchange,
    ) -> Result<Page<DataProductVersionSummary>, ServiceError> {
        let collection = service
            .list_data_product_versions(self)
            .await?
            .into_result();
        Ok(collection.map_or_else(
            || Page {
                items: Vec::new(),
                next_start: None,
            },
            |collection| Page {
                items: collection.data_product_versions,
                next_start: collection.next.map(|next| next.start),
            },
        ))
    }
}

/// A forward-only sequence of pages of a list operation.
///
/// A pager is used by one caller at a time; all paging methods take
/// `&mut self`.
#[derive(Debug)]
pub struct Pager<'a, O: PagedOptions> {
    service: &'a DataProductExchange,
    options: O,
    next_start: Option<String>,
    has_more: bool,
}

/// Pager over `ListDataProducts`.
pub type DataProductsPager<'a> = Pager<'a, ListDataProductsOptions>;

/// Pager over `ListDataProductVersions`.
pub type DataProductVersionsPager<'a> = Pager<'a, ListDataProductVersionsOptions>;

impl<'a, O: PagedOptions> Pager<'a, O> {
    /// Creates a pager starting at the first page.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidPagerOptions`] if `options` already
    /// carries a `start` cursor, or the error of [`PagedOptions::validate`].
    pub fn new(service: &'a DataProductExchange, options: O) -> Result<Self, ServiceError> {
        if options.page_start().is_some() {
            return Err(ServiceError::InvalidPagerOptions {
                reason: "the 'start' option is managed by the pager and must not be set"
                    .to_string(),
            });
        }
        options.validate()?;

        Ok(Self {
            service,
            options,
            next_start: None,
            has_more: true,
        })
    }

    /// Returns `true` if another page can be requested.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_more
    }

    /// Fetches the next page and returns its items.
    ///
    /// On failure the cursor is left unchanged, so the same page can be
    /// requested again.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NoMoreResults`] once the last page has been
    /// returned, or the error of the list operation.
    pub async fn get_next(&mut self) -> Result<Vec<O::Item>, ServiceError> {
        if !self.has_more {
            return Err(ServiceError::NoMoreResults);
        }

        let mut options = self.options.clone();
        options.set_page_start(self.next_start.clone());

        let page = options.fetch_page(self.service).await?;

        tracing::debug!(
            "Pager fetched {} items (more: {})",
            page.items.len(),
            page.next_start.is_some()
        );

        self.has_more = page.next_start.is_some();
        self.next_start = page.next_start;

        Ok(page.items)
    }

    /// Fetches all remaining pages and returns their items in order.
    ///
    /// # Errors
    ///
    /// Returns the first error of the list operation; items fetched before
    /// the error are dropped.
    pub async fn get_all(&mut self) -> Result<Vec<O::Item>, ServiceError> {
        let mut items = Vec::new();
        while self.has_more {
            items.extend(self.get_next().await?);
        }
        Ok(items)
    }

    /// Restarts the pager at the first page.
    pub fn reset(&mut self) {
        self.next_start = None;
        self.has_more = true;
    }
}
