use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

#[derive(Default)]
struct FakeClipboard {
    primary_fails: bool,
    fallback_fails: bool,
    calls: RefCell<Vec<(&'static str, String)>>,
}

impl Clipboard for FakeClipboard {
    async fn write_primary(&self, text: &str) -> Result<(), String> {
        self.calls.borrow_mut().push(("primary", text.to_owned()));
        if self.primary_fails { Err("denied".to_owned()) } else { Ok(()) }
    }

    fn write_fallback(&self, text: &str) -> Result<(), String> {
        self.calls.borrow_mut().push(("fallback", text.to_owned()));
        if self.fallback_fails { Err("unsupported".to_owned()) } else { Ok(()) }
    }
}

#[test]
fn primary_success_skips_fallback() {
    let clip = FakeClipboard::default();
    assert_eq!(block_on(copy_with_fallback(&clip, "988")), Ok(()));
    assert_eq!(*clip.calls.borrow(), vec![("primary", "988".to_owned())]);
}

#[test]
fn primary_failure_uses_fallback() {
    let clip = FakeClipboard { primary_fails: true, ..FakeClipboard::default() };
    assert_eq!(block_on(copy_with_fallback(&clip, "988")), Ok(()));
    assert_eq!(clip.calls.borrow().len(), 2);
    assert_eq!(clip.calls.borrow()[1].0, "fallback");
}

#[test]
fn both_failures_report_both_reasons() {
    let clip = FakeClipboard { primary_fails: true, fallback_fails: true, ..FakeClipboard::default() };
    let err = block_on(copy_with_fallback(&clip, "988")).unwrap_err();
    assert_eq!(err, CopyError { primary: "denied".to_owned(), fallback: "unsupported".to_owned() });
}

#[test]
fn reference_forwards_to_inner_clipboard() {
    let clip = FakeClipboard::default();
    let by_ref = &clip;
    assert_eq!(block_on(copy_with_fallback(&by_ref, "741741")), Ok(()));
    assert_eq!(clip.calls.borrow().len(), 1);
}
