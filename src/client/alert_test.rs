use super::*;

#[tokio::test]
async fn push_appends_an_alert() {
    let bus = AlertBus::new();
    bus.push("Invalid credentials", AlertKind::Danger);

    let alerts = bus.current();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].msg, "Invalid credentials");
    assert_eq!(alerts[0].kind, AlertKind::Danger);
}

#[tokio::test]
async fn remove_dismisses_only_the_target() {
    let bus = AlertBus::new();
    let first = bus.push("one", AlertKind::Danger);
    bus.push("two", AlertKind::Success);

    bus.remove(first);
    let alerts = bus.current();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].msg, "two");
}

#[tokio::test(start_paused = true)]
async fn alerts_expire_after_ttl() {
    let bus = AlertBus::new();
    bus.push("fleeting", AlertKind::Danger);
    assert_eq!(bus.current().len(), 1);

    tokio::time::sleep(ALERT_TTL + std::time::Duration::from_millis(10)).await;
    // Let the removal task run.
    tokio::task::yield_now().await;
    assert!(bus.current().is_empty());
}

#[tokio::test]
async fn subscribers_observe_pushes() {
    let bus = AlertBus::new();
    let mut rx = bus.subscribe();
    bus.push("hello", AlertKind::Success);

    rx.changed().await.expect("alert channel open");
    assert_eq!(rx.borrow().len(), 1);
}

#[tokio::test]
async fn ids_are_unique_per_push() {
    let bus = AlertBus::new();
    let a = bus.push("one", AlertKind::Danger);
    let b = bus.push("one", AlertKind::Danger);
    assert_ne!(a, b);
}
