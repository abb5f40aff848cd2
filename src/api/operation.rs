//! Request specifications for every catalog and pricing endpoint.
//!
//! Each [`Operation`] maps to one immutable [`RequestSpec`] describing its
//! path template, HTTP method and [`OperationKind`]. The kind is what the
//! outcome classifier keys on, so two endpoints that share a kind share
//! their status-code semantics.
//!
//! # Path Templates
//!
//! Templates use a single placeholder:
//! - `{id}` - one category, group or product id
//! - `{ids}` - a comma-joined list of ids for batch endpoints
//!
//! # Example
//!
//! ```rust
//! use tcgplayer_api::api::{Cardinality, Operation};
//!
//! let spec = Operation::GroupDetails.spec();
//! assert_eq!(spec.kind.cardinality, Cardinality::Batch);
//! assert_eq!(spec.build_path(Some("3,4")), "catalog/groups/3,4");
//! ```

use std::fmt;

use crate::clients::HttpMethod;

/// Hard upper bound on ids per batch call.
pub const MAX_BATCH_SIZE: usize = 250;

/// The entity family an operation is scoped to.
///
/// The scope decides which failure a 400 or 404 response turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityScope {
    /// Category-scoped lookups and searches filtered by category.
    Category,
    /// Group-scoped lookups, including group-level pricing.
    Group,
    /// Product-scoped lookups.
    Product,
    /// SKU-scoped lookups.
    Sku,
    /// Market and buylist price lists keyed by SKU or product ids.
    Pricing,
}

impl EntityScope {
    /// Returns the vendor's explanation for a 404 in this scope.
    #[must_use]
    pub const fn not_found_message(&self) -> &'static str {
        match self {
            Self::Category => "category is invalid or has no data",
            Self::Group => "group id is invalid or group has no data",
            Self::Product => {
                "one or more product ids are invalid or have no data associated with them"
            }
            Self::Sku => "one or more sku ids are invalid or have no data associated with them",
            Self::Pricing => "no data was found for the ids passed or the ids were invalid",
        }
    }
}

/// Whether an operation addresses one entity or a list of ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// One entity (or one search); 207 is never legal.
    Single,
    /// A bounded list of ids; 207 signals partial success.
    Batch,
}

/// The classification key for an operation: cardinality plus scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationKind {
    /// Single entity or batch of ids.
    pub cardinality: Cardinality,
    /// The entity family the ids belong to.
    pub scope: EntityScope,
}

impl OperationKind {
    /// Creates a single-entity kind.
    #[must_use]
    pub const fn single(scope: EntityScope) -> Self {
        Self {
            cardinality: Cardinality::Single,
            scope,
        }
    }

    /// Creates a batch kind.
    #[must_use]
    pub const fn batch(scope: EntityScope) -> Self {
        Self {
            cardinality: Cardinality::Batch,
            scope,
        }
    }

    /// Returns `true` for batch kinds.
    #[must_use]
    pub const fn is_batch(&self) -> bool {
        matches!(self.cardinality, Cardinality::Batch)
    }
}

/// Every logical operation the client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List all categories.
    CategoryList,
    /// Category details for a list of category ids.
    CategoryDetails,
    /// Groups belonging to a category.
    CategoryGroups,
    /// Category-wide media such as card backs.
    CategoryMedia,
    /// Group search filtered by category and flags.
    GroupSearch,
    /// Group details for a list of group ids.
    GroupDetails,
    /// Media for one group.
    GroupMedia,
    /// Product list and search.
    ProductList,
    /// Product details for a list of product ids.
    ProductDetails,
    /// All SKUs of one product.
    ProductSkus,
    /// Products frequently purchased together with one product.
    RelatedProducts,
    /// Media for one product.
    ProductMedia,
    /// SKU details for a list of SKU ids.
    SkuDetails,
    /// Market prices for a list of SKU ids.
    SkuMarketPrice,
    /// Market prices for a list of product ids.
    ProductMarketPrice,
    /// Market prices for every product in one group.
    GroupMarketPrice,
    /// Buylist prices for a list of SKU ids.
    SkuBuylistPrice,
    /// Buylist prices for a list of product ids.
    ProductBuylistPrice,
    /// Buylist prices for every product in one group.
    GroupBuylistPrice,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::CategoryList,
        Self::CategoryDetails,
        Self::CategoryGroups,
        Self::CategoryMedia,
        Self::GroupSearch,
        Self::GroupDetails,
        Self::GroupMedia,
        Self::ProductList,
        Self::ProductDetails,
        Self::ProductSkus,
        Self::RelatedProducts,
        Self::ProductMedia,
        Self::SkuDetails,
        Self::SkuMarketPrice,
        Self::ProductMarketPrice,
        Self::GroupMarketPrice,
        Self::SkuBuylistPrice,
        Self::ProductBuylistPrice,
        Self::GroupBuylistPrice,
    ];

    /// Returns the request specification for this operation.
    #[must_use]
    pub const fn spec(self) -> RequestSpec {
        use EntityScope::{Category, Group, Pricing, Product, Sku};

        let (template, kind, id_field) = match self {
            Self::CategoryList => ("catalog/categories", OperationKind::single(Category), None),
            Self::CategoryDetails => (
                "catalog/categories/{ids}",
                OperationKind::batch(Category),
                Some("categoryId"),
            ),
            Self::CategoryGroups => (
                "catalog/categories/{id}/groups",
                OperationKind::single(Category),
                None,
            ),
            Self::CategoryMedia => (
                "catalog/categories/{id}/media",
                OperationKind::single(Category),
                None,
            ),
            Self::GroupSearch => ("catalog/groups", OperationKind::single(Category), None),
            Self::GroupDetails => (
                "catalog/groups/{ids}",
                OperationKind::batch(Group),
                Some("groupId"),
            ),
            Self::GroupMedia => ("catalog/groups/{id}/media", OperationKind::single(Group), None),
            Self::ProductList => ("catalog/products", OperationKind::single(Product), None),
            Self::ProductDetails => (
                "catalog/products/{ids}",
                OperationKind::batch(Product),
                Some("productId"),
            ),
            Self::ProductSkus => (
                "catalog/products/{id}/skus",
                OperationKind::single(Product),
                None,
            ),
            Self::RelatedProducts => (
                "catalog/products/{id}/productsalsopurchased",
                OperationKind::single(Product),
                None,
            ),
            Self::ProductMedia => (
                "catalog/products/{id}/media",
                OperationKind::single(Product),
                None,
            ),
            Self::SkuDetails => ("catalog/skus/{ids}", OperationKind::batch(Sku), Some("skuId")),
            Self::SkuMarketPrice => (
                "pricing/sku/{ids}",
                OperationKind::batch(Pricing),
                Some("skuId"),
            ),
            Self::ProductMarketPrice => (
                "pricing/product/{ids}",
                OperationKind::batch(Pricing),
                Some("productId"),
            ),
            Self::GroupMarketPrice => ("pricing/group/{id}", OperationKind::single(Group), None),
            Self::SkuBuylistPrice => (
                "pricing/buy/sku/{ids}",
                OperationKind::batch(Pricing),
                Some("skuId"),
            ),
            Self::ProductBuylistPrice => (
                "pricing/buy/product/{ids}",
                OperationKind::batch(Pricing),
                Some("productId"),
            ),
            Self::GroupBuylistPrice => (
                "pricing/buy/group/{id}",
                OperationKind::single(Group),
                None,
            ),
        };

        RequestSpec {
            operation: self,
            http_method: HttpMethod::Get,
            template,
            kind,
            id_field,
        }
    }

    /// Returns the classification kind for this operation.
    #[must_use]
    pub const fn kind(self) -> OperationKind {
        self.spec().kind
    }

    /// Returns `true` if the operation takes a list of ids.
    #[must_use]
    pub const fn is_batch(self) -> bool {
        self.kind().is_batch()
    }

    /// Returns the default minimum list size for batch operations.
    ///
    /// Every batch operation accepts a single id in the current revision of
    /// the vendor API. The older revision required two ids on the SKU and
    /// product price lists; callers targeting it should override the
    /// minimum with [`TcgConfigBuilder::min_batch_size`](crate::TcgConfigBuilder::min_batch_size).
    /// Returns `None` for single-entity operations.
    #[must_use]
    pub const fn default_min_batch_size(self) -> Option<usize> {
        if self.is_batch() {
            Some(1)
        } else {
            None
        }
    }

    /// Returns a human-readable name for the operation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CategoryList => "category list",
            Self::CategoryDetails => "category details",
            Self::CategoryGroups => "category groups",
            Self::CategoryMedia => "category media",
            Self::GroupSearch => "group search",
            Self::GroupDetails => "group details",
            Self::GroupMedia => "group media",
            Self::ProductList => "product list",
            Self::ProductDetails => "product details",
            Self::ProductSkus => "product skus",
            Self::RelatedProducts => "related products",
            Self::ProductMedia => "product media",
            Self::SkuDetails => "sku details",
            Self::SkuMarketPrice => "sku market price",
            Self::ProductMarketPrice => "product market price",
            Self::GroupMarketPrice => "group market price",
            Self::SkuBuylistPrice => "sku buylist price",
            Self::ProductBuylistPrice => "product buylist price",
            Self::GroupBuylistPrice => "group buylist price",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The immutable description of one API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSpec {
    /// The operation this spec describes.
    pub operation: Operation,
    /// The HTTP method for this call.
    pub http_method: HttpMethod,
    /// The path template with an `{id}` or `{ids}` placeholder, or none.
    pub template: &'static str,
    /// The classification key.
    pub kind: OperationKind,
    /// For batch calls, the field in each result naming the id it answers.
    pub id_field: Option<&'static str>,
}

impl RequestSpec {
    /// Returns `true` if the template carries a path placeholder.
    #[must_use]
    pub fn has_path_target(&self) -> bool {
        self.template.contains("{id}") || self.template.contains("{ids}")
    }

    /// Builds the request path by substituting `segment` into the template.
    ///
    /// Templates without a placeholder are returned unchanged.
    #[must_use]
    pub fn build_path(&self, segment: Option<&str>) -> String {
        let segment = segment.unwrap_or_default();
        self.template
            .replace("{ids}", segment)
            .replace("{id}", segment)
    }
}
