//! Application state for the web layer.

use std::sync::Arc;

use crate::resolve::Resolver;
use crate::stations::StationDirectory;
use crate::tdx::TdxClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station name → code table, read-only
    pub directory: Arc<StationDirectory>,

    /// TDX API client
    pub tdx: Arc<TdxClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: StationDirectory, tdx: TdxClient) -> Self {
        Self {
            directory: Arc::new(directory),
            tdx: Arc::new(tdx),
        }
    }

    /// A resolver over this state's directory, building requests for the
    /// configured TDX base URL.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.directory, self.tdx.request_builder())
    }
}
