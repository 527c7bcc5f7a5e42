// ABOUTME: Request context handed to the pipeline alongside a fetched payload
// ABOUTME: Bundles the subject with the route name and derives the source partition map
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Fetch request context
//!
//! One `FetchRequest` describes one already-executed fetch: which user it was
//! for and which route produced the payload. The transport that performed the
//! fetch is external; the pipeline never issues requests of its own.

use crate::user::User;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Context of one fetch against the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    user: User,
    route: String,
}

impl FetchRequest {
    /// Build the context for a fetch of `route` on behalf of `user`.
    #[must_use]
    pub fn new(user: User, route: impl Into<String>) -> Self {
        Self {
            user,
            route: route.into(),
        }
    }

    /// Subject the fetch was issued for.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Endpoint route name the fetch was issued against.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Partition under which this request's offsets are stored, identifying
    /// the (user, route) stream for resumption after a restart.
    #[must_use]
    pub fn source_partition(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("user".to_owned(), self.user.versioned_id()),
            ("route".to_owned(), self.route.clone()),
        ])
    }
}
