//! The e-commerce backend catalog: collection metadata, shared variables and
//! one folder per API area, in display order.

mod account;
mod operations;
pub mod scripts;
mod store;

use crate::collection::{Collection, Folder, Info, SCHEMA_URL, Variable};

/// Default file name of the generated collection
pub const OUTPUT_FILE: &str = "postman_collection.json";

/// Local development server the collection targets by default
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";

pub fn info() -> Info {
    Info {
        postman_id: "ecommerce-complete-v2".to_string(),
        name: "E-Commerce Backend - Complete API Collection".to_string(),
        description: "Complete collection with 100+ endpoints for testing all backend APIs"
            .to_string(),
        schema: SCHEMA_URL.to_string(),
        version: "2.0.0".to_string(),
    }
}

pub fn variables() -> Vec<Variable> {
    let mut variables = vec![Variable::new("baseUrl", DEFAULT_BASE_URL)];
    variables.extend(
        [
            "accessToken",
            "refreshToken",
            "userId",
            "productId",
            "categoryId",
            "orderId",
            "couponId",
            "reviewId",
            "paymentId",
            "sessionId",
            "cmsPageId",
        ]
        .into_iter()
        .map(|key| Variable::new(key, "")),
    );
    variables
}

/// All folders in display order
pub fn folders() -> Vec<Folder> {
    vec![
        account::health_check(),
        account::authentication(),
        account::users(),
        store::products(),
        store::categories(),
        store::cart(),
        store::orders(),
        store::coupons(),
        store::reviews(),
        operations::payments(),
        operations::inventory(),
        operations::cms_pages(),
        operations::settings(),
    ]
}

/// Build the complete collection
pub fn build_collection() -> Collection {
    let mut collection = Collection::new(info(), variables());
    for folder in folders() {
        tracing::debug!(folder = %folder.name, requests = folder.item.len(), "Adding folder");
        collection.add_folder(folder);
    }
    collection
}
