//! Thin typed client for the hosted data service.
//!
//! The service exposes a PostgREST-style table API: filters, ordering
//! and embedded relations are all expressed in the query string, rows
//! come back as JSON arrays. This module builds those query strings and
//! maps transport errors into plain messages for the UI.

use crate::shared::api_utils::rest_url;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Query builder for one table request
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    limit: Option<usize>,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            select: None,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Column projection, including embedded relations
    /// (e.g. `"*,order_items(*,products(name,image_url))"`)
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub fn eq(mut self, field: &str, value: impl ToString) -> Self {
        self.filters
            .push((field.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn neq(mut self, field: &str, value: impl ToString) -> Self {
        self.filters
            .push((field.to_string(), format!("neq.{}", value.to_string())));
        self
    }

    pub fn gt(mut self, field: &str, value: impl ToString) -> Self {
        self.filters
            .push((field.to_string(), format!("gt.{}", value.to_string())));
        self
    }

    /// Sort by `field`; `ascending = false` puts newest first
    pub fn order(mut self, field: &str, ascending: bool) -> Self {
        self.order = Some((field.to_string(), ascending));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Serialized query string, leading `?` included; empty when no
    /// parameters are set.
    pub fn query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(select) = &self.select {
            params.push(format!("select={}", urlencoding::encode(select)));
        }
        for (field, op) in &self.filters {
            params.push(format!("{}={}", field, urlencoding::encode(op)));
        }
        if let Some((field, ascending)) = &self.order {
            let dir = if *ascending { "asc" } else { "desc" };
            params.push(format!("order={}.{}", field, dir));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }

    fn url(&self) -> String {
        format!("{}{}", rest_url(&self.name), self.query_string())
    }

    /// Fetch all matching rows
    pub async fn fetch<T>(self) -> Result<Vec<T>, String>
    where
        T: DeserializeOwned,
    {
        let response = Request::get(&self.url())
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Request failed: {}", response.status()));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// Fetch exactly one row; an empty result is an error
    pub async fn fetch_one<T>(self) -> Result<T, String>
    where
        T: DeserializeOwned,
    {
        let mut rows = self.limit(1).fetch::<T>().await?;
        rows.pop().ok_or_else(|| "Record not found".to_string())
    }

    /// Number of matching rows
    pub async fn count(self) -> Result<usize, String> {
        let rows = self.select("id").fetch::<serde_json::Value>().await?;
        Ok(rows.len())
    }

    /// Insert one row
    pub async fn insert<T>(self, row: &T) -> Result<(), String>
    where
        T: Serialize,
    {
        let response = Request::post(&self.url())
            .json(row)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Insert failed: {}", response.status()));
        }
        Ok(())
    }

    /// Patch all rows matched by the filters
    pub async fn update<T>(self, patch: &T) -> Result<(), String>
    where
        T: Serialize,
    {
        let response = Request::patch(&self.url())
            .json(patch)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Update failed: {}", response.status()));
        }
        Ok(())
    }

    /// Delete all rows matched by the filters
    pub async fn delete(self) -> Result<(), String> {
        let response = Request::delete(&self.url())
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Delete failed: {}", response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_string() {
        assert_eq!(Table::new("products").query_string(), "");
    }

    #[test]
    fn test_order_and_limit() {
        let q = Table::new("products")
            .order("created_at", false)
            .limit(20)
            .query_string();
        assert_eq!(q, "?order=created_at.desc&limit=20");
    }

    #[test]
    fn test_filters_are_encoded() {
        let q = Table::new("products")
            .eq("category", "t-shirts")
            .neq("id", "abc-123")
            .query_string();
        assert_eq!(q, "?category=eq.t-shirts&id=neq.abc-123");
    }

    #[test]
    fn test_embedded_select() {
        let q = Table::new("orders")
            .select("*,order_items(*,products(name,image_url))")
            .query_string();
        assert_eq!(
            q,
            "?select=%2A%2Corder_items%28%2A%2Cproducts%28name%2Cimage_url%29%29"
        );
    }

    #[test]
    fn test_gt_filter() {
        let q = Table::new("products").gt("discount_percentage", 0).query_string();
        assert_eq!(q, "?discount_percentage=gt.0");
    }
}
