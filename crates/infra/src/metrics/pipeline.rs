//! Sales pipeline aggregation.

use serde::Serialize;

use tradeflow_sales::{SaleOrder, SaleOrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSummary {
    pub status: SaleOrderStatus,
    pub count: usize,
    pub total_amount: u64,
}

/// Order count and value per pipeline stage, always all four stages in
/// Lead -> Quotation -> Order -> Invoiced order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesPipeline {
    pub stages: [StageSummary; 4],
}

impl SalesPipeline {
    pub fn stage(&self, status: SaleOrderStatus) -> &StageSummary {
        // PIPELINE order matches the enum's declaration order.
        &self.stages[status as usize]
    }

    /// Value of orders not yet invoiced.
    pub fn open_value(&self) -> u64 {
        self.stages
            .iter()
            .filter(|s| s.status.is_open())
            .map(|s| s.total_amount)
            .fold(0u64, u64::saturating_add)
    }

    pub fn total_count(&self) -> usize {
        self.stages.iter().map(|s| s.count).sum()
    }
}

pub fn pipeline_aggregate<'a>(sales: impl IntoIterator<Item = &'a SaleOrder>) -> SalesPipeline {
    let mut stages = SaleOrderStatus::PIPELINE.map(|status| StageSummary {
        status,
        count: 0,
        total_amount: 0,
    });

    for order in sales {
        let stage = &mut stages[order.status as usize];
        stage.count += 1;
        stage.total_amount = stage.total_amount.saturating_add(order.total_amount);
    }

    SalesPipeline { stages }
}
