//! Invoice System REST resources.
//!
//! Each submodule defines one record type, its input payloads and filters,
//! and a concrete resource wrapping [`Resource<T>`](crate::rest::Resource)
//! with named arguments and convenience finders.
//!
//! # Available Resources
//!
//! ## Clients
//!
//! ```rust,ignore
//! let client = sdk.clients().create("Juan Pérez", "juan@example.com")?;
//! let same = sdk.clients().get_by_email("juan@example.com")?;
//! ```
//!
//! ## Items
//!
//! ```rust,ignore
//! let item = sdk.items().create("Widget", "W-1", 9.99)?;
//! let same = sdk.items().get_by_sku("W-1")?;
//! ```
//!
//! ## Invoices
//!
//! ```rust,ignore
//! let invoice = sdk.invoices().create(client.id, None)?;
//! let all = sdk.invoices().get_by_client(client.id)?;
//! ```
//!
//! # Finders
//!
//! Finders send their filter to the server and then keep only exact matches,
//! since the backend ignores filters it does not support. They follow the
//! server's pages: single-match finders stop at the first page holding a
//! match and return the first match in server order, while
//! `get_by_client` reads every page.

mod client;
mod invoice;
mod item;

pub use client::{ClientChanges, ClientFilters, ClientRecord, ClientsResource, NewClient};
pub use invoice::{
    InvoiceChanges, InvoiceFilters, InvoiceLineRecord, InvoiceRecord, InvoicesResource,
    NewInvoice,
};
pub use item::{ItemChanges, ItemFilters, ItemRecord, ItemsResource, NewItem};

use crate::rest::{ListParams, Resource, ResourceError, RestResource};

/// Lists `params` page by page, handing each page's records to `visit`.
///
/// Walking stops when `visit` returns `false`, or when the server reports
/// no next page or sends an empty one.
fn for_each_page<T, V>(
    resource: &Resource<T>,
    mut params: ListParams<T::Filters>,
    mut visit: V,
) -> Result<(), ResourceError>
where
    T: RestResource,
    V: FnMut(Vec<T>) -> bool,
{
    let mut page = params.page.unwrap_or(1);
    loop {
        let response = resource.list(&params)?;
        let more = response.has_next_page() && !response.is_empty();
        if !visit(response.into_inner()) || !more {
            return Ok(());
        }

        let Some(next) = page.checked_add(1) else {
            return Ok(());
        };
        page = next;
        tracing::debug!(resource = T::NAME, page, "Following next page");
        params = params.page(page);
    }
}

/// Returns the first record matching `predicate` across all pages, in
/// server order. Stops requesting pages once a match is found.
fn find_first<T, P>(
    resource: &Resource<T>,
    params: ListParams<T::Filters>,
    field: &str,
    value: &str,
    predicate: P,
) -> Result<T, ResourceError>
where
    T: RestResource,
    P: Fn(&T) -> bool,
{
    let mut found = None;
    for_each_page(resource, params, |records| {
        found = first_exact_match(records, field, value, &predicate);
        found.is_none()
    })?;

    found.ok_or_else(|| ResourceError::NotFound {
        resource: T::NAME,
        lookup: format!("{field} {value}"),
    })
}

/// Returns every record matching `predicate` across all pages.
fn find_all<T, P>(
    resource: &Resource<T>,
    params: ListParams<T::Filters>,
    predicate: P,
) -> Result<Vec<T>, ResourceError>
where
    T: RestResource,
    P: Fn(&T) -> bool,
{
    let mut matches = Vec::new();
    for_each_page(resource, params, |records| {
        matches.extend(records.into_iter().filter(|record| predicate(record)));
        true
    })?;
    Ok(matches)
}

/// Returns the first record in `records` matching `predicate`.
///
/// Logs a warning when more than one record on the page matches.
fn first_exact_match<T, P>(records: Vec<T>, field: &str, value: &str, predicate: P) -> Option<T>
where
    T: RestResource,
    P: Fn(&T) -> bool,
{
    let mut matches = records.into_iter().filter(|record| predicate(record));
    let first = matches.next()?;

    let extra = matches.count();
    if extra > 0 {
        tracing::warn!(
            resource = T::NAME,
            field,
            value,
            matches = extra + 1,
            chosen_id = first.id(),
            "Multiple records matched, returning the first"
        );
    }

    Some(first)
}
