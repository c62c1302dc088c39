use crate::orders::execution_report::ExecutionReport;
use crate::orders::order::{Order, Quote};
use crate::utils::current_time_millis;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
struct Books {
    /// Keyed by client order id
    orders: HashMap<String, Order>,
    /// Keyed by quote request id
    quotes: HashMap<String, Quote>,
}

fn merge_non_empty(target: &mut String, value: &str) {
    if !value.is_empty() {
        target.clear();
        target.push_str(value);
    }
}

/// Thread-safe store for the client's orders and received quotes.
///
/// Same discipline as the trade store: one reader/writer lock, and every read
/// hands back owned clones.
#[derive(Debug, Default)]
pub struct OrderStore {
    books: RwLock<Books>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an order, stamping `updated_at` (and `created_at` when unset).
    pub fn add_order(&self, mut order: Order) {
        let now = current_time_millis();
        order.updated_at = now;
        if order.created_at == 0 {
            order.created_at = now;
        }
        self.books
            .write()
            .orders
            .insert(order.cl_ord_id.clone(), order);
    }

    pub fn order(&self, cl_ord_id: &str) -> Option<Order> {
        self.books.read().orders.get(cl_ord_id).cloned()
    }

    /// Looks an order up by its exchange-assigned id (linear scan).
    pub fn order_by_exchange_id(&self, order_id: &str) -> Option<Order> {
        self.books
            .read()
            .orders
            .values()
            .find(|order| order.order_id == order_id)
            .cloned()
    }

    /// Merges an execution report into the order it refers to, creating the
    /// order if the client never saw it.
    ///
    /// Identity and status fields always take the report's value. Quantities,
    /// prices, fill details, fees and reject info are only overwritten by
    /// non-empty values, so a sparse report never erases known state.
    pub fn apply_execution_report(&self, report: &ExecutionReport) {
        let now = current_time_millis();
        let mut books = self.books.write();
        let order = books
            .orders
            .entry(report.cl_ord_id.clone())
            .or_insert_with(|| Order {
                cl_ord_id: report.cl_ord_id.clone(),
                created_at: now,
                ..Order::default()
            });

        order.updated_at = now;
        order.order_id.clone_from(&report.order_id);
        order.symbol.clone_from(&report.symbol);
        order.side.clone_from(&report.side);
        order.ord_type.clone_from(&report.ord_type);
        order.ord_status.clone_from(&report.ord_status);
        order.exec_type.clone_from(&report.exec_type);
        order.account.clone_from(&report.account);

        merge_non_empty(&mut order.order_qty, &report.order_qty);
        merge_non_empty(&mut order.cash_order_qty, &report.cash_order_qty);
        merge_non_empty(&mut order.price, &report.price);
        merge_non_empty(&mut order.avg_px, &report.avg_px);
        merge_non_empty(&mut order.cum_qty, &report.cum_qty);
        merge_non_empty(&mut order.leaves_qty, &report.leaves_qty);
        merge_non_empty(&mut order.last_px, &report.last_px);
        merge_non_empty(&mut order.last_shares, &report.last_shares);
        merge_non_empty(&mut order.exec_id, &report.exec_id);
        merge_non_empty(&mut order.commission, &report.commission);
        merge_non_empty(&mut order.filled_amt, &report.filled_amt);
        merge_non_empty(&mut order.net_avg_px, &report.net_avg_px);
        merge_non_empty(&mut order.ord_rej_reason, &report.ord_rej_reason);
        merge_non_empty(&mut order.text, &report.text);

        debug!(
            cl_ord_id = %order.cl_ord_id,
            status = %order.ord_status,
            exec_type = %order.exec_type,
            "applied execution report"
        );
    }

    pub fn all_orders(&self) -> Vec<Order> {
        self.books.read().orders.values().cloned().collect()
    }

    /// Orders whose status still allows trading.
    pub fn open_orders(&self) -> Vec<Order> {
        self.books
            .read()
            .orders
            .values()
            .filter(|order| order.is_open())
            .cloned()
            .collect()
    }

    pub fn remove_order(&self, cl_ord_id: &str) -> Option<Order> {
        self.books.write().orders.remove(cl_ord_id)
    }

    /// Adds or replaces a quote, stamping `received_at`.
    pub fn add_quote(&self, mut quote: Quote) {
        quote.received_at = current_time_millis();
        self.books
            .write()
            .quotes
            .insert(quote.quote_req_id.clone(), quote);
    }

    pub fn quote(&self, quote_req_id: &str) -> Option<Quote> {
        self.books.read().quotes.get(quote_req_id).cloned()
    }

    /// Looks a quote up by its quote id (linear scan).
    pub fn quote_by_quote_id(&self, quote_id: &str) -> Option<Quote> {
        self.books
            .read()
            .quotes
            .values()
            .find(|quote| quote.quote_id == quote_id)
            .cloned()
    }

    pub fn remove_quote(&self, quote_req_id: &str) -> Option<Quote> {
        self.books.write().quotes.remove(quote_req_id)
    }

    pub fn all_quotes(&self) -> Vec<Quote> {
        self.books.read().quotes.values().cloned().collect()
    }
}
