mod common;

use cashflows::application::gateway::CashFlowsGateway;
use cashflows::domain::money::Money;
use cashflows::domain::options::TransactionOptions;
use cashflows::domain::ports::TransportBox;
use cashflows::infrastructure::in_memory::ScriptedTransport;
use std::sync::Arc;

#[tokio::test]
async fn test_gateway_is_shared_across_tasks() {
    let transport = ScriptedTransport::new();
    for _ in 0..10 {
        transport.respond("A|1|M|X|Approved").await;
    }
    let boxed: TransportBox = Box::new(transport.clone());
    let gateway = Arc::new(CashFlowsGateway::new(common::config(), boxed));

    // Verify Send + Sync by spawning tasks
    let handles: Vec<_> = (0..10)
        .map(|i| {
            let gateway = Arc::clone(&gateway);
            tokio::spawn(async move {
                let options = TransactionOptions::with_order_id(format!("order-{i}"));
                gateway
                    .purchase(&Money::from_minor(100), &common::card(), &options)
                    .await
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().success);
    }

    let mut refs: Vec<String> = transport
        .requests()
        .await
        .iter()
        .map(|request| request.fields()["tran_ref"].clone())
        .collect();
    refs.sort();
    refs.dedup();
    assert_eq!(refs.len(), 10);
}
