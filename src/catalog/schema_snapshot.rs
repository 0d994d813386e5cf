use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{ColumnInfo, ForeignKey, IndexInfo, JoinEdge, TableInfo};

/// Raw introspection output: what a database reports about itself plus the
/// declared join graph. Turned into a validated [`SchemaCatalog`] once.
///
/// [`SchemaCatalog`]: crate::catalog::SchemaCatalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    pub tables: IndexMap<String, TableInfo>,
    #[serde(default)]
    pub join_edges: Vec<JoinEdge>,
}

impl SchemaSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: &str, table: TableInfo) -> Self {
        self.tables.insert(name.to_string(), table);
        self
    }

    pub fn with_join(mut self, left: &str, right: &str, predicate: &str) -> Self {
        self.join_edges.push(JoinEdge::new(left, right, predicate));
        self
    }

    /// The analytics schema the standard pattern library is written against.
    pub fn commerce() -> Self {
        let companies = TableInfo::new()
            .with_column("id", ColumnInfo::required("INTEGER"))
            .with_column("name", ColumnInfo::required("VARCHAR(100)"))
            .with_column("industry", ColumnInfo::optional("VARCHAR(50)"))
            .with_column("location", ColumnInfo::optional("VARCHAR(100)"))
            .with_column("founded_year", ColumnInfo::optional("INTEGER"))
            .with_column("employees_count", ColumnInfo::optional("INTEGER"))
            .with_column("created_at", ColumnInfo::optional("TIMESTAMP"))
            .with_index(IndexInfo::new("ix_companies_id", &["id"], true));

        let customers = TableInfo::new()
            .with_column("id", ColumnInfo::required("INTEGER"))
            .with_column("name", ColumnInfo::required("VARCHAR(100)"))
            .with_column("email", ColumnInfo::optional("VARCHAR(100)"))
            .with_column("phone", ColumnInfo::optional("VARCHAR(20)"))
            .with_column("age", ColumnInfo::optional("INTEGER"))
            .with_column("gender", ColumnInfo::optional("VARCHAR(10)"))
            .with_column("city", ColumnInfo::optional("VARCHAR(50)"))
            .with_column("registration_date", ColumnInfo::optional("DATE"))
            .with_column("is_active", ColumnInfo::optional("BOOLEAN"))
            .with_column("total_spent", ColumnInfo::optional("FLOAT"))
            .with_column("created_at", ColumnInfo::optional("TIMESTAMP"))
            .with_index(IndexInfo::new("ix_customers_id", &["id"], true))
            .with_index(IndexInfo::new("ix_customers_email", &["email"], true));

        let products = TableInfo::new()
            .with_column("id", ColumnInfo::required("INTEGER"))
            .with_column("name", ColumnInfo::required("VARCHAR(100)"))
            .with_column("category", ColumnInfo::optional("VARCHAR(50)"))
            .with_column("brand", ColumnInfo::optional("VARCHAR(50)"))
            .with_column("price", ColumnInfo::required("FLOAT"))
            .with_column("cost", ColumnInfo::optional("FLOAT"))
            .with_column("stock_quantity", ColumnInfo::optional("INTEGER"))
            .with_column("description", ColumnInfo::optional("TEXT"))
            .with_column("is_active", ColumnInfo::optional("BOOLEAN"))
            .with_column("company_id", ColumnInfo::optional("INTEGER"))
            .with_column("created_at", ColumnInfo::optional("TIMESTAMP"))
            .with_foreign_key(ForeignKey::new("company_id", "companies", "id"))
            .with_index(IndexInfo::new("ix_products_id", &["id"], true));

        let orders = TableInfo::new()
            .with_column("id", ColumnInfo::required("INTEGER"))
            .with_column("order_number", ColumnInfo::required("VARCHAR(50)"))
            .with_column("customer_id", ColumnInfo::required("INTEGER"))
            .with_column("order_date", ColumnInfo::required("DATE"))
            .with_column("total_amount", ColumnInfo::required("FLOAT"))
            .with_column("status", ColumnInfo::optional("VARCHAR(20)"))
            .with_column("payment_method", ColumnInfo::optional("VARCHAR(30)"))
            .with_column("shipping_address", ColumnInfo::optional("TEXT"))
            .with_column("notes", ColumnInfo::optional("TEXT"))
            .with_column("created_at", ColumnInfo::optional("TIMESTAMP"))
            .with_foreign_key(ForeignKey::new("customer_id", "customers", "id"))
            .with_index(IndexInfo::new("ix_orders_id", &["id"], true))
            .with_index(IndexInfo::new("ix_orders_order_number", &["order_number"], true));

        let order_items = TableInfo::new()
            .with_column("id", ColumnInfo::required("INTEGER"))
            .with_column("order_id", ColumnInfo::required("INTEGER"))
            .with_column("product_id", ColumnInfo::required("INTEGER"))
            .with_column("quantity", ColumnInfo::required("INTEGER"))
            .with_column("unit_price", ColumnInfo::required("FLOAT"))
            .with_column("total_price", ColumnInfo::required("FLOAT"))
            .with_column("discount_rate", ColumnInfo::optional("FLOAT"))
            .with_column("created_at", ColumnInfo::optional("TIMESTAMP"))
            .with_foreign_key(ForeignKey::new("order_id", "orders", "id"))
            .with_foreign_key(ForeignKey::new("product_id", "products", "id"))
            .with_index(IndexInfo::new("ix_order_items_id", &["id"], true));

        let sales = TableInfo::new()
            .with_column("id", ColumnInfo::required("INTEGER"))
            .with_column("order_id", ColumnInfo::optional("INTEGER"))
            .with_column("sale_date", ColumnInfo::required("DATE"))
            .with_column("company_id", ColumnInfo::optional("INTEGER"))
            .with_column("product_category", ColumnInfo::optional("VARCHAR(50)"))
            .with_column("region", ColumnInfo::optional("VARCHAR(50)"))
            .with_column("amount", ColumnInfo::required("FLOAT"))
            .with_column("profit", ColumnInfo::optional("FLOAT"))
            .with_column("units_sold", ColumnInfo::optional("INTEGER"))
            .with_column("sales_rep", ColumnInfo::optional("VARCHAR(50)"))
            .with_column("channel", ColumnInfo::optional("VARCHAR(30)"))
            .with_column("created_at", ColumnInfo::optional("TIMESTAMP"))
            .with_foreign_key(ForeignKey::new("order_id", "orders", "id"))
            .with_foreign_key(ForeignKey::new("company_id", "companies", "id"))
            .with_index(IndexInfo::new("ix_sales_id", &["id"], true));

        Self::new()
            .with_table("companies", companies)
            .with_table("customers", customers)
            .with_table("products", products)
            .with_table("orders", orders)
            .with_table("order_items", order_items)
            .with_table("sales", sales)
            .with_join("sales", "orders", "sales.order_id = orders.id")
            .with_join("orders", "customers", "orders.customer_id = customers.id")
            .with_join("orders", "order_items", "orders.id = order_items.order_id")
            .with_join("order_items", "products", "order_items.product_id = products.id")
            .with_join("products", "companies", "products.company_id = companies.id")
    }
}
