// demos/src/bin/simple.rs - Replays a short market data feed through the handler

use fixmd::{
    FixMdConfig, Handled, MarketDataHandler, RawMessage, SubscriptionKind, setup_logger,
};
use std::time::Instant;
use tracing::{info, warn};

fn main() {
    setup_logger();
    info!("FIX Market Data Replay Example");

    let config = FixMdConfig::from_env();
    let handler = match MarketDataHandler::from_config(&config) {
        Ok(handler) => handler,
        Err(err) => {
            warn!("Falling back to defaults: {err}");
            match MarketDataHandler::from_config(&FixMdConfig::default()) {
                Ok(handler) => handler,
                Err(err) => {
                    warn!("Cannot build handler: {err}");
                    return;
                }
            }
        }
    };
    info!("Ring capacity: {}", handler.trade_store().capacity());

    // Phase 1: subscribe
    info!("\n=== Phase 1: Subscribing ===");
    let btc = handler.register_request(&["BTC-USD"], SubscriptionKind::SnapshotPlusUpdates);
    let eth = handler.register_request(&["ETH-USD"], SubscriptionKind::SnapshotPlusUpdates);
    let doge = handler.register_request(&["DOGE-USD"], SubscriptionKind::SnapshotPlusUpdates);
    for subscription in handler.trade_store().subscription_snapshot().values() {
        info!("{subscription}");
    }

    // Phase 2: replay
    info!("\n=== Phase 2: Replaying feed ===");
    let feed = build_feed(&btc, &eth, &doge);
    let start = Instant::now();
    for message in &feed {
        match handler.on_message(message) {
            Handled::Rejected { request_id, reason } => {
                info!("Request {request_id} rejected: {reason}");
            }
            Handled::ExecutionReport => info!("Execution report applied"),
            Handled::Quote => info!("Quote stored"),
            _ => {}
        }
    }
    let elapsed = start.elapsed();
    info!("Replayed {} messages in {:?}", feed.len(), elapsed);

    // Phase 3: read back
    info!("\n=== Phase 3: Recent records ===");
    for symbol in ["BTC-USD", "ETH-USD", "DOGE-USD"] {
        match handler.trade_store().recent_by_symbol(symbol, 5) {
            Some(records) => {
                for record in records {
                    info!("{record}");
                }
            }
            None => info!("{symbol}: no data"),
        }
    }

    info!("\n=== Phase 4: Orders ===");
    for order in handler.order_store().all_orders() {
        info!("{order}");
    }
    for quote in handler.order_store().all_quotes() {
        info!(
            "Quote {} {} bid {} x {} / offer {} x {}",
            quote.quote_id, quote.symbol, quote.bid_px, quote.bid_size, quote.offer_px, quote.offer_size
        );
    }

    info!("\n=== Summary ===");
    info!("{}", handler.statistics());
    let snapshot = handler.trade_store().snapshot();
    info!("{} (digest {})", snapshot, snapshot.digest);
}

fn build_feed(btc: &str, eth: &str, doge: &str) -> Vec<RawMessage> {
    let mut feed = vec![
        RawMessage::from_fields(&[
            (35, "W"),
            (34, "2"),
            (262, btc),
            (55, "BTC-USD"),
            (268, "4"),
            (269, "0"),
            (270, "49999.50"),
            (271, "1.2500"),
            (269, "0"),
            (270, "49999.00"),
            (271, "0.5000"),
            (269, "1"),
            (270, "50000.50"),
            (271, "2.0000"),
            (269, "2"),
            (270, "50000.00"),
            (271, "0.0100"),
            (273, "20250101-12:00:00"),
            (2446, "1"),
        ]),
        RawMessage::from_fields(&[
            (35, "W"),
            (34, "3"),
            (262, eth),
            (55, "ETH-USD"),
            (268, "3"),
            (269, "4"),
            (270, "2950.00"),
            (269, "7"),
            (270, "3050.25"),
            (269, "B"),
            (271, "18342.11"),
        ]),
        RawMessage::from_fields(&[
            (35, "Y"),
            (34, "4"),
            (262, doge),
            (281, "0"),
            (58, "unknown symbol DOGE-USD"),
        ]),
    ];

    for seq in 5..25u32 {
        let seq_text = seq.to_string();
        let price = format!("{}.{:02}", 50_000 + seq % 7, seq);
        let aggressor = if seq % 2 == 0 { "1" } else { "2" };
        feed.push(RawMessage::from_fields(&[
            (35, "X"),
            (34, seq_text.as_str()),
            (262, btc),
            (55, "BTC-USD"),
            (268, "1"),
            (269, "2"),
            (270, price.as_str()),
            (271, "0.0500"),
            (2446, aggressor),
        ]));
    }

    feed.push(RawMessage::from_fields(&[
        (35, "8"),
        (34, "25"),
        (11, "cl-1"),
        (37, "ord-1"),
        (17, "exec-1"),
        (55, "BTC-USD"),
        (54, "1"),
        (40, "2"),
        (39, "1"),
        (150, "F"),
        (38, "0.5"),
        (44, "50000"),
        (14, "0.2"),
        (151, "0.3"),
        (6, "50000"),
    ]));
    feed.push(RawMessage::from_fields(&[
        (35, "S"),
        (34, "26"),
        (117, "q-1"),
        (131, "qr-1"),
        (55, "ETH-USD"),
        (132, "3000.00"),
        (134, "1.5"),
        (133, "3001.00"),
        (135, "2.0"),
    ]));
    feed
}
