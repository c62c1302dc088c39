use crate::config::FixMdConfig;
use crate::errors::FixMdError;
use crate::handler::inbound::InboundMessage;
use crate::handler::statistics::IngestStatistics;
use crate::orders::{ExecutionReport, OrderStore, Quote};
use crate::parser::extract_entries;
use crate::persistence::{JsonLinesSink, MarketDataSink, PersistBatch};
use crate::protocol::{
    MSG_TYPE_EXECUTION_REPORT, MSG_TYPE_MARKET_DATA_INCREMENTAL, MSG_TYPE_MARKET_DATA_REJECT,
    MSG_TYPE_MARKET_DATA_SNAPSHOT, MSG_TYPE_QUOTE, SubscriptionKind, md_reject_reason_description,
    tags,
};
use crate::store::{Subscription, TradeStore};
use crate::utils::UuidGenerator;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// What the handler did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// Snapshot or incremental refresh; `stored` records reached the trade store.
    MarketData { stored: usize },
    /// Market data request reject; the subscription, if any, was dropped.
    Rejected {
        request_id: String,
        reason: &'static str,
    },
    /// Execution report merged into the order store.
    ExecutionReport,
    /// Quote recorded in the order store.
    Quote,
    /// Message type the handler does not process.
    Ignored,
}

/// Routes application messages to the stores.
///
/// Market data runs the hot path: extract the entries straight from the raw
/// text, insert them under the store's write lock, then hand the batch to the
/// sink once the lock is released. Sink failures are logged and counted,
/// never returned.
pub struct MarketDataHandler {
    trade_store: Arc<TradeStore>,
    order_store: Arc<OrderStore>,
    sink: Option<Box<dyn MarketDataSink>>,
    request_ids: UuidGenerator,
    stats: IngestStatistics,
}

impl MarketDataHandler {
    pub fn new(trade_store: Arc<TradeStore>, order_store: Arc<OrderStore>) -> Self {
        Self {
            trade_store,
            order_store,
            sink: None,
            request_ids: UuidGenerator::new(Uuid::new_v4()),
            stats: IngestStatistics::new(),
        }
    }

    /// Builds fresh stores (and the JSON-lines sink when a path is configured).
    pub fn from_config(config: &FixMdConfig) -> Result<Self, FixMdError> {
        config.validate()?;

        let handler = Self::new(
            Arc::new(TradeStore::new(config.ring_capacity)),
            Arc::new(OrderStore::new()),
        );
        match &config.persistence_path {
            Some(path) => {
                let sink = JsonLinesSink::open(path)?;
                info!(path = %path.display(), "persisting market data");
                Ok(handler.with_sink(Box::new(sink)))
            }
            None => Ok(handler),
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn MarketDataSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn trade_store(&self) -> &Arc<TradeStore> {
        &self.trade_store
    }

    pub fn order_store(&self) -> &Arc<OrderStore> {
        &self.order_store
    }

    pub fn statistics(&self) -> &IngestStatistics {
        &self.stats
    }

    /// Dispatches one inbound application message by type.
    pub fn on_message<M: InboundMessage + ?Sized>(&self, message: &M) -> Handled {
        match message.msg_type() {
            MSG_TYPE_MARKET_DATA_SNAPSHOT => Handled::MarketData {
                stored: self.handle_market_data(message, true),
            },
            MSG_TYPE_MARKET_DATA_INCREMENTAL => Handled::MarketData {
                stored: self.handle_market_data(message, false),
            },
            MSG_TYPE_MARKET_DATA_REJECT => self.handle_market_data_reject(message),
            MSG_TYPE_EXECUTION_REPORT => {
                let report = ExecutionReport::from_message(message);
                self.order_store.apply_execution_report(&report);
                Handled::ExecutionReport
            }
            MSG_TYPE_QUOTE => {
                self.order_store.add_quote(Quote::from_message(message));
                Handled::Quote
            }
            other => {
                debug!(msg_type = other, "ignoring application message");
                Handled::Ignored
            }
        }
    }

    fn handle_market_data<M: InboundMessage + ?Sized>(&self, message: &M, is_snapshot: bool) -> usize {
        let request_id = message.field(tags::MD_REQ_ID).unwrap_or_default();
        let symbol = message.field(tags::SYMBOL).unwrap_or_default();
        let seq_num = message.seq_num();

        let Some(entries) =
            extract_entries(message.raw_text(), symbol, request_id, is_snapshot, seq_num)
        else {
            debug!(symbol, request_id, seq_num, "market data message without entries");
            self.stats.record_batch(0);
            return 0;
        };

        let stored = self
            .trade_store
            .insert(symbol, &entries, is_snapshot, request_id);
        self.stats.record_batch(stored);

        if let Some(sink) = &self.sink {
            let batch = PersistBatch {
                entries: &entries,
                seq_num,
                is_snapshot,
            };
            if let Err(err) = sink.store_batch(&batch) {
                self.stats.record_persistence_failure();
                error!(symbol, seq_num, error = %err, "failed to persist market data batch");
            }
        }

        stored
    }

    fn handle_market_data_reject<M: InboundMessage + ?Sized>(&self, message: &M) -> Handled {
        let request_id = message.field(tags::MD_REQ_ID).unwrap_or_default();
        let code = message.field(tags::MD_REQ_REJ_REASON).unwrap_or_default();
        let text = message.field(tags::TEXT).unwrap_or_default();
        let reason = md_reject_reason_description(code);

        self.stats.record_reject();
        warn!(request_id, code, reason, text, "market data request rejected");
        self.trade_store.remove_subscription_by_request_id(request_id);

        Handled::Rejected {
            request_id: request_id.to_string(),
            reason,
        }
    }

    /// Allocates a request id for a market data request over `symbols`.
    ///
    /// Streaming requests register the new id in the trade store; snapshot-only
    /// requests leave the registry untouched. The registry is keyed by request
    /// id, so a multi-symbol request is tracked under its last symbol.
    pub fn register_request(&self, symbols: &[&str], kind: SubscriptionKind) -> String {
        let request_id = self.request_ids.next().to_string();
        if kind == SubscriptionKind::SnapshotPlusUpdates {
            for symbol in symbols {
                self.trade_store.add_subscription(symbol, kind, &request_id);
            }
        }
        request_id
    }

    pub fn unsubscribe_by_request_id(&self, request_id: &str) -> Option<Subscription> {
        let removed = self.trade_store.remove_subscription_by_request_id(request_id);
        if removed.is_none() {
            info!(request_id, "no active subscription for request id");
        }
        removed
    }

    pub fn unsubscribe_symbol(&self, symbol: &str) -> Vec<Subscription> {
        let removed = self.trade_store.remove_subscriptions_by_symbol(symbol);
        if removed.is_empty() {
            info!(symbol, "no active subscriptions for symbol");
        }
        removed
    }
}

impl fmt::Debug for MarketDataHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarketDataHandler")
            .field("trade_store", &self.trade_store)
            .field("order_store", &self.order_store)
            .field("has_sink", &self.sink.is_some())
            .field("stats", &self.stats)
            .finish()
    }
}
