//! Query resolution pipeline.
//!
//! Free text → [`ParsedQuery`] → two station lookups → [`ResolvedRoute`] →
//! [`RequestDescriptor`]. Every stage is pure; a failure stops the pipeline
//! before any request is built.

use tracing::debug;

use crate::query::{ExtractionError, ParsedQuery, extract};
use crate::request::{RequestBuilder, RequestDescriptor, ResolvedRoute};
use crate::stations::{DirectoryError, StationDirectory};

/// Errors from resolving a query, tagged by the stage that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The query text could not be parsed
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// A station name is not in the directory
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl ResolveError {
    /// Name of the failing stage: `"extraction"` or `"lookup"`.
    pub fn stage(&self) -> &'static str {
        match self {
            ResolveError::Extraction(_) => "extraction",
            ResolveError::Directory(_) => "lookup",
        }
    }

    /// The piece of input responsible for the failure.
    pub fn fragment(&self) -> &str {
        match self {
            ResolveError::Extraction(e) => e.input(),
            ResolveError::Directory(DirectoryError::UnknownStation(name)) => name,
        }
    }
}

/// Everything the pipeline produced for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub query: ParsedQuery,
    pub route: ResolvedRoute,
    pub request: RequestDescriptor,
}

/// Resolves free-text queries into provider requests.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    directory: &'a StationDirectory,
    builder: RequestBuilder,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a directory and request builder.
    pub fn new(directory: &'a StationDirectory, builder: RequestBuilder) -> Self {
        Self { directory, builder }
    }

    /// Join a parsed query with its two station codes.
    pub fn resolve_parsed(&self, parsed: &ParsedQuery) -> Result<ResolvedRoute, DirectoryError> {
        let origin_code = self.directory.lookup(parsed.origin_name())?;
        let destination_code = self.directory.lookup(parsed.destination_name())?;

        Ok(ResolvedRoute::new(
            origin_code,
            destination_code,
            parsed.date().clone(),
        ))
    }

    /// Run the whole pipeline, keeping every intermediate result.
    pub fn resolve_query(&self, raw: &str) -> Result<Resolution, ResolveError> {
        let query = extract(raw)?;
        debug!(
            date = %query.date(),
            origin = query.origin_name(),
            destination = query.destination_name(),
            "extracted query"
        );

        let route = self.resolve_parsed(&query)?;
        debug!(
            origin = %route.origin_code,
            destination = %route.destination_code,
            "resolved station codes"
        );

        let request = self.builder.build(&route);

        Ok(Resolution {
            query,
            route,
            request,
        })
    }

    /// Extract and resolve a query into a route.
    pub fn resolve_route(&self, raw: &str) -> Result<ResolvedRoute, ResolveError> {
        Ok(self.resolve_query(raw)?.route)
    }

    /// Resolve a query all the way to a request descriptor.
    pub fn resolve(&self, raw: &str) -> Result<RequestDescriptor, ResolveError> {
        Ok(self.resolve_query(raw)?.request)
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(StationDirectory::builtin(), RequestBuilder::default())
    }
}

/// Resolve a query using the built-in station table and default API root.
pub fn resolve(raw: &str) -> Result<RequestDescriptor, ResolveError> {
    Resolver::default().resolve(raw)
}
