//! Startup documents and degraded-mode loading.
//!
//! Three documents arrive once at startup: company info, the product
//! catalog, and site copy. Each one parses independently; a document
//! that is missing or malformed degrades to its default with a warning
//! instead of failing the session. With an empty catalog every add is a
//! no-op, which is the intended degraded mode.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use sepet_commerce::catalog::{CatalogIndex, ProductsDocument};

use crate::copy::SiteCopy;

/// Company contact details from the company document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub legal_name: String,
    pub address: String,
    /// Human-formatted phone number, e.g. "+90 555 123 45 67".
    pub phone: String,
    pub email: String,
    /// Social profile URL.
    pub instagram: String,
    pub slogan: String,
}

impl CompanyInfo {
    /// Phone as a bare digit string, the form the deep links take.
    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(char::is_ascii_digit).collect()
    }
}

/// A startup document failed to parse.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Everything the storefront needs at startup.
#[derive(Debug, Default)]
pub struct StartupData {
    pub company: CompanyInfo,
    pub catalog: CatalogIndex,
    pub copy: SiteCopy,
}

impl StartupData {
    /// Strictly parse a company document.
    pub fn parse_company(json: &str) -> Result<CompanyInfo, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Strictly parse a products document into a catalog.
    pub fn parse_catalog(json: &str) -> Result<CatalogIndex, DocumentError> {
        let document: ProductsDocument = serde_json::from_str(json)?;
        Ok(CatalogIndex::from_document(document))
    }

    /// Strictly parse a site copy document.
    pub fn parse_copy(json: &str) -> Result<SiteCopy, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Assemble startup data from the raw documents, degrading any
    /// absent or unreadable one to its default.
    pub fn from_json(
        company: Option<&str>,
        products: Option<&str>,
        site: Option<&str>,
    ) -> Self {
        let company = company
            .and_then(|json| match Self::parse_company(json) {
                Ok(company) => Some(company),
                Err(err) => {
                    warn!(%err, "company document unreadable, using defaults");
                    None
                }
            })
            .unwrap_or_default();

        let catalog = products
            .and_then(|json| match Self::parse_catalog(json) {
                Ok(catalog) => Some(catalog),
                Err(err) => {
                    warn!(%err, "products document unreadable, starting with an empty catalog");
                    None
                }
            })
            .unwrap_or_else(CatalogIndex::empty);

        let copy = site
            .and_then(|json| match Self::parse_copy(json) {
                Ok(copy) => Some(copy),
                Err(err) => {
                    warn!(%err, "site document unreadable, using default copy");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            company,
            catalog,
            copy,
        }
    }
}
