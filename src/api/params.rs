//! Query options for list and search endpoints.
//!
//! Each struct renders to ordered `(name, value)` pairs using the vendor's
//! camelCase parameter names. Unset options are omitted rather than sent
//! empty.
//!
//! # Example
//!
//! ```rust
//! use tcgplayer_api::api::GroupSearchQuery;
//!
//! let query = GroupSearchQuery::new(1).has_sealed(true).limit(50);
//! assert_eq!(
//!     query.to_pairs(),
//!     vec![
//!         ("categoryId".to_string(), "1".to_string()),
//!         ("hasSealed".to_string(), "true".to_string()),
//!         ("limit".to_string(), "50".to_string()),
//!     ]
//! );
//! ```

/// Ordered query pairs, ready for [`HttpRequestBuilder::query_pairs`](crate::clients::HttpRequestBuilder::query_pairs).
pub type QueryPairs = Vec<(String, String)>;

fn push<V: ToString>(pairs: &mut QueryPairs, name: &str, value: Option<V>) {
    if let Some(value) = value {
        pairs.push((name.to_string(), value.to_string()));
    }
}

/// Offset/limit paging for enumerable endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Maximum number of results to return.
    pub limit: Option<u32>,
}

impl Paging {
    /// Creates paging with both values set.
    #[must_use]
    pub const fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    /// Renders the set values as query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push(&mut pairs, "offset", self.offset);
        push(&mut pairs, "limit", self.limit);
        pairs
    }
}

/// Options for listing all categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListQuery {
    /// Field to sort by, such as `name` or `popularity`.
    pub sort_order: Option<String>,
    /// Sort descending.
    pub sort_desc: Option<bool>,
    /// Paging.
    pub paging: Paging,
}

impl CategoryListQuery {
    /// Renders the set values as query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push(&mut pairs, "sortOrder", self.sort_order.as_deref());
        push(&mut pairs, "sortDesc", self.sort_desc);
        pairs.extend(self.paging.to_pairs());
        pairs
    }
}

/// Options for the group search endpoint.
///
/// The vendor answers 400 if `categoryId` is missing, so it is required here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSearchQuery {
    /// Category to search within.
    pub category_id: u32,
    /// Category name filter.
    pub category_name: Option<String>,
    /// Only supplemental (or only non-supplemental) groups.
    pub is_supplemental: Option<bool>,
    /// Only groups with (or without) sealed product.
    pub has_sealed: Option<bool>,
    /// Field to sort by.
    pub sort_order: Option<String>,
    /// Sort descending.
    pub sort_desc: Option<bool>,
    /// Paging.
    pub paging: Paging,
}

impl GroupSearchQuery {
    /// Creates a search over one category with no other filters.
    #[must_use]
    pub const fn new(category_id: u32) -> Self {
        Self {
            category_id,
            category_name: None,
            is_supplemental: None,
            has_sealed: None,
            sort_order: None,
            sort_desc: None,
            paging: Paging {
                offset: None,
                limit: None,
            },
        }
    }

    /// Filters by category name.
    #[must_use]
    pub fn category_name(mut self, name: impl Into<String>) -> Self {
        self.category_name = Some(name.into());
        self
    }

    /// Filters on the supplemental flag.
    #[must_use]
    pub const fn is_supplemental(mut self, value: bool) -> Self {
        self.is_supplemental = Some(value);
        self
    }

    /// Filters on sealed product.
    #[must_use]
    pub const fn has_sealed(mut self, value: bool) -> Self {
        self.has_sealed = Some(value);
        self
    }

    /// Sorts by `field`, descending if `desc`.
    #[must_use]
    pub fn sort(mut self, field: impl Into<String>, desc: bool) -> Self {
        self.sort_order = Some(field.into());
        self.sort_desc = Some(desc);
        self
    }

    /// Skips `offset` results.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.paging.offset = Some(offset);
        self
    }

    /// Returns at most `limit` results.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.paging.limit = Some(limit);
        self
    }

    /// Renders the set values as query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push(&mut pairs, "categoryId", Some(self.category_id));
        push(&mut pairs, "categoryName", self.category_name.as_deref());
        push(&mut pairs, "isSupplemental", self.is_supplemental);
        push(&mut pairs, "hasSealed", self.has_sealed);
        push(&mut pairs, "sortOrder", self.sort_order.as_deref());
        push(&mut pairs, "sortDesc", self.sort_desc);
        pairs.extend(self.paging.to_pairs());
        pairs
    }
}

/// Options for the product list and search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListQuery {
    /// Category filter.
    pub category_id: Option<u32>,
    /// Category name filter.
    pub category_name: Option<String>,
    /// Group filter.
    pub group_id: Option<u32>,
    /// Group name filter.
    pub group_name: Option<String>,
    /// Product name filter.
    pub product_name: Option<String>,
    /// Include category-specific extended fields.
    pub get_extended_fields: Option<bool>,
    /// Product types to include; sent comma-joined.
    pub product_types: Vec<String>,
    /// Include each product's SKUs.
    pub include_skus: Option<bool>,
    /// Paging.
    pub paging: Paging,
}

impl ProductListQuery {
    /// Renders the set values as query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push(&mut pairs, "categoryId", self.category_id);
        push(&mut pairs, "categoryName", self.category_name.as_deref());
        push(&mut pairs, "groupId", self.group_id);
        push(&mut pairs, "groupName", self.group_name.as_deref());
        push(&mut pairs, "productName", self.product_name.as_deref());
        push(&mut pairs, "getExtendedFields", self.get_extended_fields);
        if !self.product_types.is_empty() {
            pairs.push(("productTypes".to_string(), self.product_types.join(",")));
        }
        pairs.extend(self.paging.to_pairs());
        push(&mut pairs, "includeSkus", self.include_skus);
        pairs
    }
}

/// Options for product detail lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductDetailsQuery {
    /// Include category-specific extended fields.
    pub get_extended_fields: Option<bool>,
    /// Include each product's SKUs.
    pub include_skus: Option<bool>,
}

impl ProductDetailsQuery {
    /// Renders the set values as query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push(&mut pairs, "getExtendedFields", self.get_extended_fields);
        push(&mut pairs, "includeSkus", self.include_skus);
        pairs
    }
}
