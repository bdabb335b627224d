use fw_core::router::{SubmitError, View, ViewRouter};

#[test]
fn submit_enters_results_with_carried_text() {
    let mut router = ViewRouter::new();
    router.submit("test fraud scenario").unwrap();
    assert_eq!(router.view(), View::Results);
    assert_eq!(router.scenario(), "test fraud scenario");
}

#[test]
fn empty_submit_is_rejected_and_observable() {
    let mut router = ViewRouter::new();
    let err = router.submit("").unwrap_err();
    assert_eq!(err, SubmitError::EmptyScenario);
    assert_eq!(router.view(), View::Simulation);
}

#[test]
fn full_navigation_cycle() {
    let mut router = ViewRouter::new();

    router.submit("business account fraud").unwrap();
    assert_eq!(router.view(), View::Results);

    router.open_dashboard();
    assert_eq!(router.view(), View::Dashboard);

    router.back();
    assert_eq!(router.view(), View::Results);
    assert_eq!(router.scenario(), "business account fraud");

    router.back();
    assert_eq!(router.view(), View::Simulation);
    assert_eq!(router.scenario(), "");

    // The router has no terminal state; a fresh submission works again.
    router.submit("identity theft pattern").unwrap();
    assert_eq!(router.view(), View::Results);
    assert_eq!(router.scenario(), "identity theft pattern");
}
