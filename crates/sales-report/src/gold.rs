//! Gold aggregations over the silver sales table.
//!
//! Each aggregation casts the columns it needs, so it works on the typed
//! frame from [`clean_frame`](crate::clean_frame) and on a silver table read
//! back as text alike. Outputs are sorted with ties broken by the group key.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::{debug, info};

use crate::error::Result;
use crate::silver::{ensure_dir, write_csv};

/// Rows kept by the top-N tables.
pub const TOP_N: IdxSize = 5;

/// One named gold output.
#[derive(Debug, Clone)]
pub struct GoldTable {
    pub name: &'static str,
    pub frame: DataFrame,
}

impl GoldTable {
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}

fn total_price() -> Expr {
    col("total_price").cast(DataType::Float64)
}

fn sum_by(silver: &DataFrame, key: &str, value: Expr, value_name: &str) -> LazyFrame {
    silver
        .clone()
        .lazy()
        .group_by([col(key)])
        .agg([value.sum().alias(value_name)])
}

/// Total sales per product category, largest first.
pub fn sales_by_category(silver: &DataFrame) -> Result<DataFrame> {
    Ok(sum_by(silver, "product_category", total_price(), "total_price")
        .sort(
            ["total_price", "product_category"],
            SortMultipleOptions::default().with_order_descending_multi([true, false]),
        )
        .collect()?)
}

/// Products with the most units sold.
pub fn top_products(silver: &DataFrame, limit: IdxSize) -> Result<DataFrame> {
    Ok(silver
        .clone()
        .lazy()
        .group_by([col("product_id"), col("product_name")])
        .agg([col("quantity_sold")
            .cast(DataType::Int64)
            .sum()
            .alias("quantity_sold")])
        .sort(
            ["quantity_sold", "product_id", "product_name"],
            SortMultipleOptions::default().with_order_descending_multi([true, false, false]),
        )
        .limit(limit)
        .collect()?)
}

/// Total sales per payment method, largest first.
pub fn sales_by_payment(silver: &DataFrame) -> Result<DataFrame> {
    Ok(sum_by(silver, "payment_method", total_price(), "total_price")
        .sort(
            ["total_price", "payment_method"],
            SortMultipleOptions::default().with_order_descending_multi([true, false]),
        )
        .collect()?)
}

/// Customers with the highest total spend.
pub fn top_customers(silver: &DataFrame, limit: IdxSize) -> Result<DataFrame> {
    Ok(sum_by(silver, "cust_id", total_price(), "total_price")
        .sort(
            ["total_price", "cust_id"],
            SortMultipleOptions::default().with_order_descending_multi([true, false]),
        )
        .limit(limit)
        .collect()?)
}

/// Total sales per `YYYY-MM` purchase month, in calendar order.
pub fn monthly_sales_trend(silver: &DataFrame) -> Result<DataFrame> {
    Ok(silver
        .clone()
        .lazy()
        .with_column(
            col("purchase_date")
                .cast(DataType::String)
                .str()
                .slice(lit(0), lit(7))
                .alias("purchase_month"),
        )
        .group_by([col("purchase_month")])
        .agg([total_price().sum().alias("total_price")])
        .sort(["purchase_month"], SortMultipleOptions::default())
        .collect()?)
}

/// Computes every gold table.
pub fn build_gold(silver: &DataFrame) -> Result<Vec<GoldTable>> {
    let tables = vec![
        GoldTable {
            name: "gold_sales_by_category",
            frame: sales_by_category(silver)?,
        },
        GoldTable {
            name: "gold_top_products",
            frame: top_products(silver, TOP_N)?,
        },
        GoldTable {
            name: "gold_sales_by_payment",
            frame: sales_by_payment(silver)?,
        },
        GoldTable {
            name: "gold_top_customers",
            frame: top_customers(silver, TOP_N)?,
        },
        GoldTable {
            name: "gold_monthly_sales_trend",
            frame: monthly_sales_trend(silver)?,
        },
    ];
    for table in &tables {
        debug!(table = table.name, rows = table.frame.height(), "built gold table");
    }
    Ok(tables)
}

/// Writes each table as `<name>.csv` under `root`, replacing earlier output.
pub fn write_gold(root: &Path, tables: &[GoldTable]) -> Result<Vec<PathBuf>> {
    ensure_dir(root)?;
    let mut written = Vec::with_capacity(tables.len());
    for table in tables {
        let path = root.join(table.file_name());
        let mut frame = table.frame.clone();
        write_csv(&path, &mut frame)?;
        written.push(path);
    }
    info!(tables = written.len(), root = %root.display(), "wrote gold tables");
    Ok(written)
}
