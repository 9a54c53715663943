//! Application context: one transport, one session, editors on demand.

use stockdesk_auth::{Capability, RouteAccess};
use stockdesk_core::{ProductId, TransportError};
use stockdesk_products::ProductEditor;
use stockdesk_session::SessionHandle;
use stockdesk_transport::{Api, HttpTransport, ProductPage, ProductQuery};

/// Everything a UI shell needs, constructed once at application start.
///
/// All clones of the inner transport share one cookie jar, so a login
/// performed through the session is visible to every editor and listing
/// call made through this context.
pub struct AppContext {
    api: HttpTransport,
    session: SessionHandle<HttpTransport>,
}

impl AppContext {
    /// Build the context against a backend base URL. The session starts
    /// `Unknown`; callers should run one `refresh()` at startup.
    pub fn connect(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let api = HttpTransport::new(base_url)?;
        let session = SessionHandle::new(api.clone());
        Ok(Self { api, session })
    }

    pub fn session(&self) -> &SessionHandle<HttpTransport> {
        &self.session
    }

    /// Gate a route before mounting it.
    pub fn guard(&self, required: Option<&Capability>) -> RouteAccess {
        self.session.guard(required)
    }

    /// Open an editor session for one product. Each editor exclusively owns
    /// its record copies; dropping it abandons any in-flight request.
    pub fn editor(&self, id: ProductId) -> ProductEditor<HttpTransport> {
        ProductEditor::new(self.api.clone(), id)
    }

    /// Fetch one page of the product listing.
    pub async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, TransportError> {
        self.api.list_products(query).await
    }
}
