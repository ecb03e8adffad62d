//! Post-response scripts shared by the catalog folders.

/// Stores tokens and the user id after register / login.
pub fn save_tokens() -> Vec<String> {
    [
        "if (pm.response.code === 200 || pm.response.code === 201) {",
        "    const response = pm.response.json();",
        "    if (response.data.accessToken) pm.collectionVariables.set('accessToken', response.data.accessToken);",
        "    if (response.data.refreshToken) pm.collectionVariables.set('refreshToken', response.data.refreshToken);",
        "    if (response.data.user) pm.collectionVariables.set('userId', response.data.user._id);",
        "}",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Stores `data._id` of a 201 response into `variable`.
pub fn save_id(variable: &str) -> Vec<String> {
    vec![
        "if (pm.response.code === 201) {".to_string(),
        format!(
            "    pm.collectionVariables.set('{}', pm.response.json().data._id);",
            variable
        ),
        "}".to_string(),
    ]
}
