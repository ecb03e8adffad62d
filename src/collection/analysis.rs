//! Variable dependency analysis.
//!
//! A request that references `{{productId}}` only works if some earlier
//! request's post-response script stored `productId`. The collection format
//! does not record that ordering, so it is recovered here by walking the
//! requests in document order.

use std::collections::HashSet;
use std::fmt;

use crate::collection::types::{Collection, RequestItem};
use crate::variable::{VariableCapture, VariableResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Referenced but missing from the collection's variable list
    Undeclared,
    /// Declared with an empty initial value and not captured by any earlier request
    NotYetCaptured,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Undeclared => f.write_str("undeclared"),
            IssueKind::NotYetCaptured => f.write_str("not yet captured"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyIssue {
    pub kind: IssueKind,
    pub variable: String,
    pub folder: String,
    pub request: String,
    /// Later request whose script captures the variable, if any
    pub captured_by: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DependencyReport {
    pub issues: Vec<DependencyIssue>,
    /// (request name, capture) in document order
    pub captures: Vec<(String, VariableCapture)>,
}

impl DependencyReport {
    pub fn undeclared(&self) -> impl Iterator<Item = &DependencyIssue> {
        self.issues
            .iter()
            .filter(|i| i.kind == IssueKind::Undeclared)
    }

    pub fn has_undeclared(&self) -> bool {
        self.undeclared().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Every `{{name}}` a request references, in url / header / auth / body order
pub fn referenced_variables(item: &RequestItem) -> Vec<String> {
    let request = &item.request;
    let mut texts: Vec<&str> = vec![request.url.raw.as_str()];
    texts.extend(request.header.iter().map(|h| h.value.as_str()));
    if let Some(auth) = &request.auth {
        texts.extend(auth.bearer.iter().map(|attr| attr.value.as_str()));
    }
    if let Some(body) = &request.body {
        texts.push(body.raw.as_str());
    }

    let mut names: Vec<String> = Vec::new();
    for text in texts {
        for name in VariableResolver::placeholders(text) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

pub fn analyze(collection: &Collection) -> DependencyReport {
    let requests = collection.requests();

    let captures_per_request: Vec<Vec<VariableCapture>> = requests
        .iter()
        .map(|(_, item)| {
            item.test_script()
                .map(VariableCapture::extract_all)
                .unwrap_or_default()
        })
        .collect();

    let mut available: HashSet<&str> = collection
        .variable
        .iter()
        .filter(|v| !v.is_dynamic())
        .map(|v| v.key.as_str())
        .collect();

    let mut issues = Vec::new();

    for (index, (folder, item)) in requests.iter().enumerate() {
        for name in referenced_variables(item) {
            if available.contains(name.as_str()) {
                continue;
            }

            let kind = if collection.variable(&name).is_some() {
                IssueKind::NotYetCaptured
            } else {
                IssueKind::Undeclared
            };
            let captured_by = requests
                .iter()
                .zip(&captures_per_request)
                .find(|(_, captures)| captures.iter().any(|c| c.name == name))
                .map(|((_, capturer), _)| capturer.name.clone());

            issues.push(DependencyIssue {
                kind,
                variable: name,
                folder: folder.name.clone(),
                request: item.name.clone(),
                captured_by,
            });
        }

        // Captures take effect after the response, i.e. for later requests only.
        for capture in &captures_per_request[index] {
            available.insert(capture.name.as_str());
        }
    }

    let captures = requests
        .iter()
        .zip(captures_per_request.iter())
        .flat_map(|((_, item), captures)| {
            captures
                .iter()
                .map(move |capture| (item.name.clone(), capture.clone()))
        })
        .collect();

    DependencyReport { issues, captures }
}
