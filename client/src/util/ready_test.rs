use futures::executor::block_on;

use super::*;

#[test]
fn published_value_reaches_every_waiter() {
    let (publisher, ready) = readiness::<u32>();
    let other = ready.clone();
    assert!(publisher.publish(7));
    assert_eq!(block_on(ready.wait()), Some(7));
    assert_eq!(block_on(other.wait()), Some(7));
}

#[test]
fn dropped_publisher_resolves_to_none() {
    let (publisher, ready) = readiness::<String>();
    drop(publisher);
    assert_eq!(block_on(ready.wait()), None);
}

#[test]
fn peek_is_none_until_resolved() {
    let (publisher, ready) = readiness::<u8>();
    assert_eq!(ready.peek(), None);
    publisher.publish(3);
    assert_eq!(block_on(ready.wait()), Some(3));
    assert_eq!(ready.peek(), Some(3));
}

#[test]
fn publish_without_subscribers_reports_false() {
    let (publisher, ready) = readiness::<u8>();
    drop(ready);
    assert!(!publisher.publish(1));
}
