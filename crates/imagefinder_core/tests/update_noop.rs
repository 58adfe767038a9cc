use imagefinder_core::{update, CrawlSession, Msg};

#[test]
fn update_is_noop() {
    let session = CrawlSession::new();
    let (next, effects) = update(session.clone(), Msg::NoOp);

    assert_eq!(session, next);
    assert!(effects.is_empty());
}

#[test]
fn cancel_without_live_submission_is_noop() {
    let session = CrawlSession::new();
    let (next, effects) = update(session.clone(), Msg::Cancel);

    assert_eq!(session, next);
    assert!(effects.is_empty());
}
