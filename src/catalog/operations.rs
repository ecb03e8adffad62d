use serde_json::json;

use super::scripts::save_id;
use crate::collection::{Folder, RequestBuilder};

pub fn payments() -> Folder {
    Folder::new("9. Payments").with_requests([
        RequestBuilder::get("Get All Payments", "/payments").build(),
        RequestBuilder::get("Get Payment Stats", "/payments/stats").build(),
        RequestBuilder::get("Get Payment by Intent ID", "/payments/intent/pi_123456").build(),
        RequestBuilder::get("Get Payments by Order", "/payments/order/{{orderId}}").build(),
        RequestBuilder::get("Get Payment by ID", "/payments/{{paymentId}}").build(),
        RequestBuilder::post("Create Payment", "/payments")
            .with_body(json!({
                "orderId": "{{orderId}}",
                "paymentIntentId": "pi_123456",
                "method": "credit_card",
                "amount": 99.99
            }))
            .build(),
        RequestBuilder::put("Update Payment Status", "/payments/{{paymentId}}/status")
            .with_body(json!({"status": "completed"}))
            .build(),
        RequestBuilder::post("Process Refund", "/payments/{{paymentId}}/refund")
            .with_body(json!({"amount": 50.00, "reason": "Customer request"}))
            .build(),
    ])
}

pub fn inventory() -> Folder {
    Folder::new("10. Inventory").with_requests([
        RequestBuilder::get("Get All Transactions", "/inventory").build(),
        RequestBuilder::get("Get Inventory Stats", "/inventory/stats").build(),
        RequestBuilder::get("Get Product Transactions", "/inventory/product/{{productId}}").build(),
        RequestBuilder::get("Get Transaction by ID", "/inventory/:id").build(),
        RequestBuilder::post("Create Transaction", "/inventory")
            .with_body(json!({
                "productId": "{{productId}}",
                "action": "in",
                "quantity": 100,
                "reason": "New stock"
            }))
            .build(),
        RequestBuilder::post("Adjust Stock", "/inventory/adjust")
            .with_body(json!({
                "productId": "{{productId}}",
                "quantity": 50,
                "reason": "Inventory count"
            }))
            .build(),
        RequestBuilder::post("Add Stock", "/inventory/add")
            .with_body(json!({"productId": "{{productId}}", "quantity": 100, "reason": "Restock"}))
            .build(),
        RequestBuilder::post("Remove Stock", "/inventory/remove")
            .with_body(json!({
                "productId": "{{productId}}",
                "quantity": 10,
                "reason": "Damaged items"
            }))
            .build(),
    ])
}

pub fn cms_pages() -> Folder {
    Folder::new("11. CMS Pages").with_requests([
        RequestBuilder::get("Get Published Pages", "/cms/published")
            .public()
            .build(),
        RequestBuilder::get("Get Page by Slug", "/cms/slug/about-us")
            .public()
            .build(),
        RequestBuilder::get("Get All Pages", "/cms").build(),
        RequestBuilder::get("Get Page by ID", "/cms/{{cmsPageId}}").build(),
        RequestBuilder::post("Create Page", "/cms")
            .with_body(json!({
                "title": "About Us",
                "content": "<h1>About</h1>",
                "isPublished": true
            }))
            .with_test_script(save_id("cmsPageId"))
            .build(),
        RequestBuilder::put("Update Page", "/cms/{{cmsPageId}}")
            .with_body(json!({"content": "<h1>Updated About</h1>"}))
            .build(),
        RequestBuilder::delete("Delete Page", "/cms/{{cmsPageId}}").build(),
        RequestBuilder::post("Publish Page", "/cms/{{cmsPageId}}/publish").build(),
        RequestBuilder::post("Unpublish Page", "/cms/{{cmsPageId}}/unpublish").build(),
    ])
}

pub fn settings() -> Folder {
    Folder::new("12. Settings").with_requests([
        RequestBuilder::get("Get Public Settings", "/settings/public")
            .public()
            .build(),
        RequestBuilder::get("Get All Settings", "/settings").build(),
        RequestBuilder::put("Update Settings", "/settings")
            .with_body(json!({"businessName": "My Store", "currency": "USD"}))
            .build(),
        RequestBuilder::put("Update Business Info", "/settings/business")
            .with_body(json!({
                "businessName": "TechStore",
                "contactInfo": {"email": "info@techstore.com"}
            }))
            .build(),
        RequestBuilder::put("Update Currency", "/settings/currency")
            .with_body(json!({"currency": "USD", "currencySymbol": "$"}))
            .build(),
        RequestBuilder::put("Update Theme", "/settings/theme")
            .with_body(json!({"primaryColor": "#007bff"}))
            .build(),
        RequestBuilder::put("Update Features", "/settings/features")
            .with_body(json!({"enableReviews": true, "enableWishlist": true}))
            .build(),
        RequestBuilder::put("Update Tax Settings", "/settings/tax")
            .with_body(json!({"enabled": true, "rate": 10}))
            .build(),
        RequestBuilder::put("Update Shipping Settings", "/settings/shipping")
            .with_body(json!({"enabled": true, "freeShippingThreshold": 50}))
            .build(),
        RequestBuilder::put("Update Payment Settings", "/settings/payments")
            .with_body(json!({"stripe": {"enabled": true}}))
            .build(),
        RequestBuilder::put("Update Email Settings", "/settings/email")
            .with_body(json!({"fromEmail": "noreply@store.com"}))
            .build(),
        RequestBuilder::put("Update SEO Settings", "/settings/seo")
            .with_body(json!({"metaTitle": "My Store"}))
            .build(),
        RequestBuilder::put("Update Legal Settings", "/settings/legal")
            .with_body(json!({"termsOfService": "Terms..."}))
            .build(),
        RequestBuilder::put("Update Maintenance Mode", "/settings/maintenance")
            .with_body(json!({"enabled": false}))
            .build(),
    ])
}
