use anyhow::Context;
use chrono::Local;

use tradeflow_ai::ask_with_fallback;
use tradeflow_app::{AppConfig, assistant_for};
use tradeflow_infra::metrics::{
    margin_alert, pipeline_aggregate, stock_alerts, top_clients_by_sales, top_vendors_by_rating,
};
use tradeflow_infra::{DatasetGenerator, ErpStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    tradeflow_observability::init_with(config.log_format);

    let today = Local::now().date_naive();
    let dataset = match config.seed {
        Some(seed) => DatasetGenerator::seeded(seed, today).generate(),
        None => {
            tracing::warn!("TRADEFLOW_SEED not set; generating from entropy");
            DatasetGenerator::from_entropy(today).generate()
        }
    };
    let store = ErpStore::new(dataset);

    let mut args = std::env::args().skip(1).peekable();
    if args.peek().is_some_and(|a| a == "--json") {
        let snapshot =
            serde_json::to_string_pretty(&store.snapshot()).context("serialize snapshot")?;
        println!("{snapshot}");
        return Ok(());
    }

    let kpis = store.dashboard_kpis(today);
    tracing::info!(
        inventory_value = kpis.inventory_value,
        active_clients = kpis.active_clients,
        low_stock = kpis.low_stock_products,
        expired = kpis.expired_products,
        open_pipeline = kpis.open_pipeline_value,
        profit = kpis.finance.total_profit,
        best_month = kpis.finance.best_month.as_deref().unwrap_or("-"),
        "dashboard"
    );

    store.with_sale_orders(|orders| {
        for stage in pipeline_aggregate(orders).stages {
            tracing::info!(
                stage = %stage.status,
                orders = stage.count,
                value = stage.total_amount,
                "pipeline"
            );
        }
        for order in margin_alert(orders, config.margin_threshold) {
            tracing::warn!(
                order_id = %order.id,
                client = %order.client_name,
                margin = order.margin,
                threshold = config.margin_threshold,
                "low margin"
            );
        }
    });

    store.with_products(|products| {
        let alerts = stock_alerts(products, today);
        tracing::info!(count = alerts.len(), "stock alerts");
        for alert in alerts.iter().filter(|a| a.kind.is_expiry()) {
            tracing::debug!(
                product_id = %alert.product_id,
                kind = ?alert.kind,
                days = alert.days_remaining,
                "expiry"
            );
        }
    });

    for client in top_clients_by_sales(store.clients(), 3) {
        tracing::info!(client = %client.name, total_sales = client.total_sales, "top client");
    }

    for vendor in top_vendors_by_rating(store.vendors(), 3) {
        tracing::info!(
            vendor = %vendor.name,
            rating = vendor.rating,
            preferred = vendor.is_preferred(),
            "top vendor"
        );
    }

    let question = args.collect::<Vec<_>>().join(" ");
    if !question.trim().is_empty() {
        let assistant = assistant_for(&config);
        let reply = ask_with_fallback(assistant.as_ref(), &question, &store.context_digest()).await;
        println!("{reply}");
    }

    Ok(())
}
