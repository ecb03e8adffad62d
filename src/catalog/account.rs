use serde_json::json;

use super::scripts::save_tokens;
use crate::collection::{Folder, RequestBuilder};

pub fn health_check() -> Folder {
    Folder::new("0. Health Check")
        .with_requests([RequestBuilder::get("API Health Check", "/health").public().build()])
}

pub fn authentication() -> Folder {
    Folder::new("1. Authentication").with_requests([
        RequestBuilder::post("Register", "/auth/register")
            .with_body(json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "john@example.com",
                "password": "Pass@123"
            }))
            .public()
            .with_test_script(save_tokens())
            .build(),
        RequestBuilder::post("Login", "/auth/login")
            .with_body(json!({"email": "admin@example.com", "password": "Admin@123"}))
            .public()
            .with_test_script(save_tokens())
            .build(),
        RequestBuilder::post("Refresh Token", "/auth/refresh")
            .with_body(json!({"refreshToken": "{{refreshToken}}"}))
            .public()
            .build(),
        RequestBuilder::post("Logout", "/auth/logout")
            .with_body(json!({"refreshToken": "{{refreshToken}}"}))
            .build(),
        RequestBuilder::post("Forgot Password", "/auth/forgot-password")
            .with_body(json!({"email": "user@example.com"}))
            .public()
            .build(),
        RequestBuilder::post("Reset Password", "/auth/reset-password")
            .with_body(json!({"token": "reset-token", "password": "NewPass@123"}))
            .public()
            .build(),
    ])
}

pub fn users() -> Folder {
    Folder::new("2. Users").with_requests([
        RequestBuilder::get("Get All Users", "/users?page=1&limit=10").build(),
        RequestBuilder::get("Get User Stats", "/users/stats").build(),
        RequestBuilder::get("Get User by ID", "/users/{{userId}}").build(),
        RequestBuilder::post("Create User", "/users")
            .with_body(json!({
                "firstName": "Jane",
                "lastName": "Smith",
                "email": "jane@example.com",
                "password": "Pass@123",
                "role": "user"
            }))
            .build(),
        RequestBuilder::put("Update User", "/users/{{userId}}")
            .with_body(json!({"firstName": "Jane Updated", "isActive": true}))
            .build(),
        RequestBuilder::delete("Delete User", "/users/{{userId}}").build(),
        RequestBuilder::put("Update Profile", "/users/profile/update")
            .with_body(json!({"firstName": "John", "phone": "+1234567890"}))
            .build(),
        RequestBuilder::post("Add Address", "/users/profile/addresses")
            .with_body(json!({
                "addressType": "shipping",
                "firstName": "John",
                "lastName": "Doe",
                "addressLine1": "123 Main St",
                "city": "New York",
                "state": "NY",
                "postalCode": "10001",
                "country": "USA",
                "isDefault": true
            }))
            .build(),
        RequestBuilder::put("Update Address", "/users/profile/addresses/:addressId")
            .with_body(json!({"addressLine1": "456 Oak Ave"}))
            .build(),
        RequestBuilder::delete("Delete Address", "/users/profile/addresses/:addressId").build(),
        RequestBuilder::get("Get Wishlist", "/users/profile/wishlist").build(),
        RequestBuilder::post("Add to Wishlist", "/users/profile/wishlist")
            .with_body(json!({"productId": "{{productId}}"}))
            .build(),
        RequestBuilder::delete("Remove from Wishlist", "/users/profile/wishlist/{{productId}}")
            .build(),
        RequestBuilder::delete("Clear Wishlist", "/users/profile/wishlist").build(),
    ])
}
