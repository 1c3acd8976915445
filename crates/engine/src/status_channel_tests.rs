use super::*;
use fleet_core::Job;

#[tokio::test]
async fn sent_update_is_received_in_order() {
    let (tx, mut rx) = status_channel();
    let a = Job::builder().build();
    let b = Job::builder().build();
    tx.send(StatusUpdate(a.clone())).await.unwrap();
    tx.send(StatusUpdate(b.clone())).await.unwrap();

    assert_eq!(rx.recv().await.unwrap().0.id, a.id);
    assert_eq!(rx.recv().await.unwrap().0.id, b.id);
}
