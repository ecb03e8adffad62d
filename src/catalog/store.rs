use serde_json::json;

use super::scripts::save_id;
use crate::collection::{Folder, RequestBuilder};

pub fn products() -> Folder {
    Folder::new("3. Products").with_requests([
        RequestBuilder::get("Get All Products", "/products?page=1&limit=10")
            .public()
            .build(),
        RequestBuilder::get("Get Featured Products", "/products/featured")
            .public()
            .build(),
        RequestBuilder::get("Get Product by Slug", "/products/slug/iphone-15-pro")
            .public()
            .build(),
        RequestBuilder::get("Get Product by ID", "/products/{{productId}}")
            .public()
            .build(),
        RequestBuilder::get("Get Related Products", "/products/{{productId}}/related")
            .public()
            .build(),
        RequestBuilder::get("Get Product Stats", "/products/admin/stats").build(),
        RequestBuilder::post("Create Product", "/products")
            .with_body(json!({
                "name": "iPhone 15 Pro",
                "description": "Latest iPhone",
                "category": "{{categoryId}}",
                "sku": "IPHONE15PRO",
                "price": 999.99,
                "stock": 50,
                "isFeatured": true
            }))
            .with_test_script(save_id("productId"))
            .build(),
        RequestBuilder::put("Update Product", "/products/{{productId}}")
            .with_body(json!({"price": 949.99, "stock": 45}))
            .build(),
        RequestBuilder::delete("Delete Product", "/products/{{productId}}").build(),
        RequestBuilder::put("Bulk Update Products", "/products/bulk/update")
            .with_body(json!({"productIds": ["id1", "id2"], "updateData": {"isActive": true}}))
            .build(),
        RequestBuilder::delete("Bulk Delete Products", "/products/bulk/delete")
            .with_body(json!({"productIds": ["id1", "id2"]}))
            .build(),
    ])
}

pub fn categories() -> Folder {
    Folder::new("4. Categories").with_requests([
        RequestBuilder::get("Get All Categories", "/categories")
            .public()
            .build(),
        RequestBuilder::get("Get Category Tree", "/categories/tree")
            .public()
            .build(),
        RequestBuilder::get("Get Category by Slug", "/categories/slug/electronics")
            .public()
            .build(),
        RequestBuilder::get("Get Category by ID", "/categories/{{categoryId}}")
            .public()
            .build(),
        RequestBuilder::get("Get Category Stats", "/categories/admin/stats").build(),
        RequestBuilder::post("Create Category", "/categories")
            .with_body(json!({
                "name": "Electronics",
                "description": "Electronic devices",
                "isActive": true
            }))
            .with_test_script(save_id("categoryId"))
            .build(),
        RequestBuilder::put("Update Category", "/categories/{{categoryId}}")
            .with_body(json!({"description": "Updated description"}))
            .build(),
        RequestBuilder::delete("Delete Category", "/categories/{{categoryId}}").build(),
        RequestBuilder::post("Reorder Categories", "/categories/reorder")
            .with_body(json!([
                {"id": "cat1", "sortOrder": 1},
                {"id": "cat2", "sortOrder": 2}
            ]))
            .build(),
    ])
}

pub fn cart() -> Folder {
    // Guest carts: everything except merge works without a token.
    Folder::new("5. Cart").with_requests([
        RequestBuilder::get("Get Cart", "/carts").public().build(),
        RequestBuilder::post("Add to Cart", "/carts/items")
            .with_body(json!({"productId": "{{productId}}", "quantity": 2}))
            .public()
            .build(),
        RequestBuilder::put("Update Cart Item", "/carts/items/{{productId}}")
            .with_body(json!({"quantity": 3}))
            .public()
            .build(),
        RequestBuilder::delete("Remove from Cart", "/carts/items/{{productId}}")
            .public()
            .build(),
        RequestBuilder::delete("Clear Cart", "/carts").public().build(),
        RequestBuilder::post("Merge Cart", "/carts/merge").build(),
    ])
}

pub fn orders() -> Folder {
    Folder::new("6. Orders").with_requests([
        RequestBuilder::get("Get All Orders", "/orders?page=1&limit=10").build(),
        RequestBuilder::get("Get Order Stats", "/orders/stats").build(),
        RequestBuilder::get("Get Order by Number", "/orders/number/ORD-202412-00001").build(),
        RequestBuilder::get("Get User Order History", "/orders/user/{{userId}}/history").build(),
        RequestBuilder::get("Get Order by ID", "/orders/{{orderId}}").build(),
        RequestBuilder::get("Get Order Tracking", "/orders/{{orderId}}/tracking").build(),
        RequestBuilder::post("Create Order", "/orders")
            .with_body(json!({
                "email": "customer@example.com",
                "shippingAddress": {
                    "firstName": "John",
                    "lastName": "Doe",
                    "addressLine1": "123 Main St",
                    "city": "New York",
                    "state": "NY",
                    "postalCode": "10001",
                    "country": "USA"
                },
                "paymentMethod": "credit_card"
            }))
            .with_test_script(save_id("orderId"))
            .build(),
        RequestBuilder::put("Update Order Status", "/orders/{{orderId}}/status")
            .with_body(json!({"status": "shipped"}))
            .build(),
        RequestBuilder::put("Update Payment Status", "/orders/{{orderId}}/payment")
            .with_body(json!({"paymentStatus": "completed"}))
            .build(),
        RequestBuilder::put("Add Tracking Number", "/orders/{{orderId}}/tracking")
            .with_body(json!({"trackingNumber": "1Z999AA10123456784", "shippingMethod": "UPS"}))
            .build(),
        RequestBuilder::post("Cancel Order", "/orders/{{orderId}}/cancel").build(),
    ])
}

pub fn coupons() -> Folder {
    Folder::new("7. Coupons").with_requests([
        RequestBuilder::post("Validate Coupon", "/coupons/validate")
            .with_body(json!({
                "code": "SAVE20",
                "orderValue": 100,
                "productIds": [],
                "categoryIds": []
            }))
            .public()
            .build(),
        RequestBuilder::get("Get All Coupons", "/coupons").build(),
        RequestBuilder::get("Get Coupon by ID", "/coupons/{{couponId}}").build(),
        RequestBuilder::post("Create Coupon", "/coupons")
            .with_body(json!({
                "code": "SAVE20",
                "name": "20% Off",
                "type": "percentage",
                "value": 20,
                "minimumOrderValue": 50,
                "usageLimit": 100
            }))
            .with_test_script(save_id("couponId"))
            .build(),
        RequestBuilder::put("Update Coupon", "/coupons/{{couponId}}")
            .with_body(json!({"value": 25}))
            .build(),
        RequestBuilder::delete("Delete Coupon", "/coupons/{{couponId}}").build(),
    ])
}

pub fn reviews() -> Folder {
    Folder::new("8. Reviews").with_requests([
        RequestBuilder::get("Get All Reviews", "/reviews?productId={{productId}}")
            .public()
            .build(),
        RequestBuilder::get("Get Product Review Stats", "/reviews/product/{{productId}}/stats")
            .public()
            .build(),
        RequestBuilder::get("Get Review by ID", "/reviews/{{reviewId}}")
            .public()
            .build(),
        RequestBuilder::post("Create Review", "/reviews")
            .with_body(json!({
                "productId": "{{productId}}",
                "rating": 5,
                "title": "Great!",
                "comment": "Excellent product"
            }))
            .with_test_script(save_id("reviewId"))
            .build(),
        RequestBuilder::put("Update Review", "/reviews/{{reviewId}}")
            .with_body(json!({"rating": 4, "comment": "Updated review"}))
            .build(),
        RequestBuilder::delete("Delete Review", "/reviews/{{reviewId}}").build(),
        RequestBuilder::post("Mark Review Helpful", "/reviews/{{reviewId}}/helpful")
            .public()
            .build(),
        RequestBuilder::post("Report Review", "/reviews/{{reviewId}}/report")
            .public()
            .build(),
        RequestBuilder::post("Approve Review", "/reviews/{{reviewId}}/approve").build(),
        RequestBuilder::post("Respond to Review", "/reviews/{{reviewId}}/respond")
            .with_body(json!({"message": "Thank you for your feedback!"}))
            .build(),
    ])
}
