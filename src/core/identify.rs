use crate::core::catalog::ModelCatalog;
use crate::core::code::CodeExtractor;
use crate::domain::model::Identification;
use crate::domain::ports::{ModelStore, ProductStore, SearchField};
use crate::utils::error::{CatalogError, Result};

/// Model-bound product lookup: resolve a raw name to a catalog model, strip
/// it down to the residual code, then look the code up in the product store.
///
/// Unlike plain matching, this flow REQUIRES a resolved model; an unmatched
/// name surfaces as `NotFound` rather than an empty value.
pub struct ProductIdentifier<M: ModelStore, P: ProductStore> {
    catalog: ModelCatalog<M>,
    products: P,
    extractor: CodeExtractor,
}

impl<M: ModelStore, P: ProductStore> ProductIdentifier<M, P> {
    pub fn new(catalog: ModelCatalog<M>, products: P, extractor: CodeExtractor) -> Self {
        Self {
            catalog,
            products,
            extractor,
        }
    }

    pub async fn identify(&self, product_name: &str) -> Result<Identification> {
        let model = self
            .catalog
            .match_model(product_name)
            .await?
            .ok_or_else(|| CatalogError::not_found("model", product_name))?;

        let product_code = self.extractor.extract(product_name, Some(&model))?;
        tracing::debug!(%product_code, "derived residual code");

        // A fully-stripped name has no code to look up.
        let product = if product_code.is_empty() {
            None
        } else {
            self.products
                .find_one(SearchField::ProductCode, &code_lookup_pattern(&product_code))
                .await?
        };

        Ok(Identification {
            model,
            product_code,
            product,
        })
    }
}

/// Case-insensitive whole-field match on the stored product code.
fn code_lookup_pattern(code: &str) -> String {
    format!("(?i)^{}$", regex::escape(code))
}
