pub mod analysis;
pub mod request;
pub mod types;

// Re-export commonly used types
pub use analysis::{DependencyIssue, DependencyReport, IssueKind, analyze};
pub use request::{ACCESS_TOKEN_VARIABLE, RequestBuilder};
pub use types::{
    Auth, BASE_URL_PLACEHOLDER, Body, Collection, Event, Folder, Header, Info, Item, Method,
    Request, RequestItem, SCHEMA_URL, Script, Url, Variable,
};
