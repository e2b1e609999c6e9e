//! Product catalog endpoints.

use minutemart_core::{CategoryId, ProductId, SortBy};
use serde_json::Value;

use super::types::{Product, ProductData};
use super::{ApiClient, ApiError};

/// Filter criteria for the catalog filter endpoint.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub dietary: Option<String>,
    pub brand: Option<String>,
    pub in_stock: bool,
    pub sort_by: SortBy,
    pub page: u32,
    pub limit: u32,
}

impl ApiClient {
    /// Full-text product search.
    pub async fn search_products(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<Value, ApiError> {
        self.get_raw(
            "/products/search",
            &[
                ("q", query.to_string()),
                ("page", page.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    /// All product categories.
    pub async fn categories(&self) -> Result<Value, ApiError> {
        self.get_raw("/products/categories", &[]).await
    }

    /// Products within one category.
    pub async fn products_by_category(
        &self,
        category_id: &CategoryId,
        page: u32,
        limit: u32,
    ) -> Result<Value, ApiError> {
        self.get_raw(
            &format!("/products/category/{category_id}"),
            &[("page", page.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    /// Multi-criteria catalog filter.
    pub async fn filter_products(&self, filter: &ProductFilter) -> Result<Value, ApiError> {
        let mut query = vec![
            ("page", filter.page.to_string()),
            ("limit", filter.limit.to_string()),
            ("sortBy", filter.sort_by.as_query_value().to_string()),
        ];
        if let Some(category) = &filter.category {
            query.push(("category", category.clone()));
        }
        if let Some(min_price) = filter.min_price {
            query.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = filter.max_price {
            query.push(("maxPrice", max_price.to_string()));
        }
        if let Some(dietary) = &filter.dietary {
            query.push(("dietary", dietary.clone()));
        }
        if let Some(brand) = &filter.brand {
            query.push(("brand", brand.clone()));
        }
        if filter.in_stock {
            query.push(("inStock", "true".to_string()));
        }
        self.get_raw("/products/filter", &query).await
    }

    /// Raw product detail envelope.
    pub async fn product_detail_raw(&self, product_id: &ProductId) -> Result<Value, ApiError> {
        self.get_raw(&format!("/products/{product_id}"), &[]).await
    }

    /// Typed product detail; fails if the envelope reports a failure.
    pub async fn product_detail(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        let envelope = self.product_detail_raw(product_id).await?;
        let data: ProductData = Self::data_from_envelope(envelope)?;
        Ok(data.product)
    }

    /// Alternatives for an out-of-stock or rejected product.
    pub async fn alternative_products(&self, product_id: &ProductId) -> Result<Value, ApiError> {
        self.get_raw(&format!("/products/{product_id}/alternatives"), &[])
            .await
    }

    /// Featured / popular products.
    pub async fn featured_products(&self, limit: u32) -> Result<Value, ApiError> {
        self.get_raw("/products/featured", &[("limit", limit.to_string())])
            .await
    }
}
