//! Executor implementations for product discovery.
//!
//! Every discovery call reshapes returned products into the flattened
//! summary (`formatted_products`) and optionally attaches up to three
//! inline images ahead of the structured payload. Image failures degrade
//! to "no image for that product", never to a failed call.

use minutemart_core::{CategoryId, ProductId, SortBy};
use serde_json::{Value, json};

use crate::api::ProductFilter;
use crate::api::types::Product;
use crate::error::ServerError;
use crate::images::{MAX_IMAGES_PER_CALL, fetch_image};
use crate::mcp::types::ToolContent;

use super::{ToolExecutor, bool_or, opt_str, require_str, u32_or};

impl ToolExecutor<'_> {
    pub(super) async fn search_products(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let query = require_str(input, "query")?;
        let page = u32_or(input, "page", 1);
        let limit = u32_or(input, "limit", 10);
        let show_images = bool_or(input, "show_images", true);

        let envelope = self.api.search_products(query, page, limit).await?;
        self.reshape_product_list(envelope, show_images).await
    }

    pub(super) async fn get_categories(&self) -> Result<Vec<ToolContent>, ServerError> {
        let envelope = self.api.categories().await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn get_products_by_category(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let category_id = CategoryId::new(require_str(input, "category_id")?);
        let page = u32_or(input, "page", 1);
        let limit = u32_or(input, "limit", 10);
        let show_images = bool_or(input, "show_images", true);

        let envelope = self
            .api
            .products_by_category(&category_id, page, limit)
            .await?;
        self.reshape_product_list(envelope, show_images).await
    }

    pub(super) async fn filter_products(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let sort_by = match input["sort_by"].as_str() {
            None | Some("rating") => SortBy::Rating,
            Some("price_low") => SortBy::PriceLow,
            Some("price_high") => SortBy::PriceHigh,
            Some("name") => SortBy::Name,
            Some("newest") => SortBy::Newest,
            Some("discount") => SortBy::Discount,
            Some(other) => {
                return Err(ServerError::InvalidParams(format!(
                    "unsupported sort_by value '{other}'"
                )));
            }
        };
        let filter = ProductFilter {
            category: opt_str(input, "category"),
            min_price: input["min_price"].as_f64(),
            max_price: input["max_price"].as_f64(),
            dietary: opt_str(input, "dietary"),
            brand: opt_str(input, "brand"),
            in_stock: bool_or(input, "in_stock", true),
            sort_by,
            page: u32_or(input, "page", 1),
            limit: u32_or(input, "limit", 10),
        };
        let show_images = bool_or(input, "show_images", true);

        let envelope = self.api.filter_products(&filter).await?;
        self.reshape_product_list(envelope, show_images).await
    }

    pub(super) async fn get_product_details(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let product_id = ProductId::new(require_str(input, "product_id")?);
        let show_image = bool_or(input, "show_image", false);

        let envelope = self.api.product_detail_raw(&product_id).await?;

        let mut contents = Vec::new();
        if show_image && envelope["success"] == true {
            let image_url = envelope["data"]["product"]["image"].as_str();
            if let Some(image) = fetch_image(self.api.http(), image_url).await {
                contents.push(image);
            }
        }
        contents.push(ToolContent::json(&envelope)?);
        Ok(contents)
    }

    pub(super) async fn show_product_image(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let product_id = ProductId::new(require_str(input, "product_id")?);
        let envelope = self.api.product_detail_raw(&product_id).await?;

        if envelope["success"] != true {
            return Ok(vec![ToolContent::json(&json!({
                "error": "Product not found"
            }))?]);
        }

        let image_url = envelope["data"]["product"]["image"]
            .as_str()
            .map(ToString::to_string);
        match fetch_image(self.api.http(), image_url.as_deref()).await {
            Some(image) => Ok(vec![image]),
            None => Ok(vec![ToolContent::json(&json!({
                "error": "Could not load product image",
                "image_url": image_url,
            }))?]),
        }
    }

    pub(super) async fn get_alternative_products(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let product_id = ProductId::new(require_str(input, "product_id")?);
        let envelope = self.api.alternative_products(&product_id).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn get_featured_products(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let limit = u32_or(input, "limit", 12);
        let show_images = bool_or(input, "show_images", true);

        let envelope = self.api.featured_products(limit).await?;
        self.reshape_product_list(envelope, show_images).await
    }

    /// Add `formatted_products` summaries to a list envelope and attach up
    /// to three product images ahead of the structured payload.
    async fn reshape_product_list(
        &self,
        mut envelope: Value,
        show_images: bool,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let mut contents = Vec::new();

        // A success envelope whose data is not an object cannot hold the
        // summaries; forward it untouched rather than reshaping.
        if envelope["success"] == true && envelope["data"].is_object() {
            // Rows are deserialized one by one so a single malformed row
            // drops only itself, not the whole summary list.
            let products: Vec<Product> = envelope["data"]["products"]
                .as_array()
                .map(|rows| {
                    rows.iter()
                        .filter_map(|row| serde_json::from_value(row.clone()).ok())
                        .collect()
                })
                .unwrap_or_default();

            let formatted: Vec<Value> = products.iter().map(Product::summary).collect();
            envelope["data"]["formatted_products"] = Value::Array(formatted);

            if show_images {
                for product in products.iter().take(MAX_IMAGES_PER_CALL) {
                    if let Some(image) =
                        fetch_image(self.api.http(), product.image.as_deref()).await
                    {
                        contents.push(image);
                    }
                }
            }
        }

        contents.push(ToolContent::json(&envelope)?);
        Ok(contents)
    }
}
