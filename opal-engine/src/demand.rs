use opal_catalog::ProductRecord;

use crate::config::OptimizerConfig;
use crate::error::OptimizeError;

/// Expected outcome of selling at a candidate price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandProjection {
    pub expected_sales: f64,
    pub expected_revenue: f64,
    pub expected_profit: f64,
}

/// Project unit sales at `price` on a constant-elasticity curve anchored at
/// the product's historical baseline, then derive revenue and profit.
pub fn project(
    price: f64,
    record: &ProductRecord,
    config: &OptimizerConfig,
) -> Result<DemandProjection, OptimizeError> {
    let (base_sales, base_price) = match (record.historical_sales, record.historical_price) {
        (Some(sales), Some(hist_price)) => (sales, hist_price),
        // No baseline on file: assume the default volume at today's price.
        _ => (config.default_base_sales, record.price),
    };

    // A zero baseline price degenerates the curve to the baseline volume.
    let expected_sales = if base_price == 0.0 {
        base_sales
    } else {
        base_sales * (price / base_price).powf(config.elasticity)
    };

    let cost = record.cost.ok_or(OptimizeError::MissingCost)?;

    // Revenue and profit are derived from sales, never computed separately.
    let expected_revenue = price * expected_sales;
    let expected_profit = (price - cost) * expected_sales;

    Ok(DemandProjection {
        expected_sales,
        expected_revenue,
        expected_profit,
    })
}
