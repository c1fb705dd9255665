//! Tests for the iterative schema registrar

use crate::test_utils::{
    ACME_NAMESPACE, RecordingListener, doc_ref, source_with, type_document,
};
use pkgcheck_domain::NodeTypeManager;
use pkgcheck_domain::constants::MAX_REGISTRATION_PASSES;
use pkgcheck_providers::InMemoryRepository;
use pkgcheck_validate::{RegistrationPhase, SchemaRegistrar};

#[test]
fn test_dependency_chain_registers_one_level_per_pass() {
    // E depends on D, D on C, supplied in reverse order
    let source = source_with(&[
        ("c", type_document("C", "nt:base")),
        ("d", type_document("D", "acme:C")),
        ("e", type_document("E", "acme:D")),
    ]);
    let mut repository = InMemoryRepository::new();
    let mut listener = RecordingListener::default();
    let mut registrar = SchemaRegistrar::new(&source);

    let report = registrar.register(
        &mut repository,
        &mut listener,
        &[doc_ref("e"), doc_ref("d"), doc_ref("c")],
        &[],
    );

    assert_eq!(report.registered_in_pass(1), vec![&doc_ref("c")]);
    assert_eq!(report.registered_in_pass(2), vec![&doc_ref("d")]);
    assert_eq!(report.registered_in_pass(3), vec![&doc_ref("e")]);
    assert_eq!(report.passes, 3);
    assert!(report.is_complete());
    assert!(listener.reports.is_empty());
    for name in ["acme:C", "acme:D", "acme:E"] {
        assert!(repository.node_types().has_node_type(name));
    }
}

#[test]
fn test_success_within_a_pass_unblocks_later_documents() {
    let source = source_with(&[
        ("a", type_document("A", "nt:base")),
        ("b", type_document("B", "acme:A")),
    ]);
    let mut repository = InMemoryRepository::new();
    let mut listener = RecordingListener::default();
    let mut registrar = SchemaRegistrar::new(&source);

    let report = registrar.register(
        &mut repository,
        &mut listener,
        &[doc_ref("a"), doc_ref("b")],
        &[],
    );

    assert_eq!(report.passes, 1);
    assert_eq!(
        report.registered_in_pass(1),
        vec![&doc_ref("a"), &doc_ref("b")]
    );
}

#[test]
fn test_registration_is_order_independent() {
    for order in [["b", "a"], ["a", "b"]] {
        let source = source_with(&[
            ("a", type_document("A", "nt:base")),
            ("b", type_document("B", "acme:A")),
        ]);
        let mut repository = InMemoryRepository::new();
        let mut listener = RecordingListener::default();
        let mut registrar = SchemaRegistrar::new(&source);
        let main: Vec<_> = order.iter().map(|name| doc_ref(name)).collect();

        let report = registrar.register(&mut repository, &mut listener, &main, &[]);

        assert!(report.is_complete(), "order {order:?} left failures");
        assert!(listener.reports.is_empty());
        assert_eq!(report.registered().count(), 2);
    }
}

#[test]
fn test_retry_is_bounded_to_five_passes() {
    // T6 > T5 > ... > T1, supplied deepest first: T6 would need a sixth pass
    let mut documents = vec![("t1", type_document("T1", "nt:base"))];
    for level in 2..=6 {
        documents.push((
            ["t2", "t3", "t4", "t5", "t6"][level - 2],
            type_document(&format!("T{level}"), &format!("acme:T{}", level - 1)),
        ));
    }
    let source = source_with(&documents);
    let mut repository = InMemoryRepository::new();
    let mut listener = RecordingListener::default();
    let mut registrar = SchemaRegistrar::new(&source);
    let main: Vec<_> = ["t6", "t5", "t4", "t3", "t2", "t1"]
        .iter()
        .map(|name| doc_ref(name))
        .collect();

    let report = registrar.register(&mut repository, &mut listener, &main, &[]);

    assert_eq!(report.passes, MAX_REGISTRATION_PASSES);
    assert_eq!(listener.reported(), vec![&doc_ref("t6")]);
    assert_eq!(source.open_count(&doc_ref("t6")), MAX_REGISTRATION_PASSES);
    assert_eq!(report.registered().count(), 5);
    let failure = report.failures().next().unwrap();
    assert_eq!(failure.reference, doc_ref("t6"));
    assert_eq!(failure.phase, RegistrationPhase::Pass(MAX_REGISTRATION_PASSES));
    assert!(!repository.node_types().has_node_type("acme:T6"));
}

#[test]
fn test_permanent_failure_reported_once_without_blocking_others() {
    let source = source_with(&[
        ("broken", format!("{ACME_NAMESPACE}[acme:Broken")),
        ("good", type_document("Good", "nt:base")),
    ]);
    let mut repository = InMemoryRepository::new();
    let mut listener = RecordingListener::default();
    let mut registrar = SchemaRegistrar::new(&source);

    let report = registrar.register(
        &mut repository,
        &mut listener,
        &[doc_ref("broken"), doc_ref("good")],
        &[],
    );

    assert_eq!(listener.reported(), vec![&doc_ref("broken")]);
    assert!(listener.reports[0].1.contains("Parse error"));
    assert_eq!(source.open_count(&doc_ref("broken")), MAX_REGISTRATION_PASSES);
    assert_eq!(source.open_count(&doc_ref("good")), 1);
    assert_eq!(report.registered_in_pass(1), vec![&doc_ref("good")]);
    assert_eq!(report.failures().count(), 1);
}

#[test]
fn test_missing_document_is_a_registration_failure() {
    let source = source_with(&[]);
    let mut repository = InMemoryRepository::new();
    let mut listener = RecordingListener::default();
    let mut registrar = SchemaRegistrar::new(&source);

    let report = registrar.register(&mut repository, &mut listener, &[doc_ref("gone")], &[]);

    assert_eq!(report.failures().count(), 1);
    assert!(listener.reports[0].1.contains("Not found"));
}

#[test]
fn test_second_registration_attempts_nothing_already_registered() {
    let source = source_with(&[
        ("a", type_document("A", "nt:base")),
        ("b", type_document("B", "acme:A")),
    ]);
    let mut repository = InMemoryRepository::new();
    let mut listener = RecordingListener::default();
    let mut registrar = SchemaRegistrar::new(&source);
    let main = [doc_ref("b"), doc_ref("a")];

    registrar.register(&mut repository, &mut listener, &main, &[]);
    let opens_after_first = source.total_opens();
    let second = registrar.register(&mut repository, &mut listener, &main, &[]);

    assert_eq!(source.total_opens(), opens_after_first);
    assert_eq!(second.passes, 0);
    assert!(second.outcomes.is_empty());
    assert_eq!(second.already_registered, main.to_vec());
    assert!(registrar.is_registered(&doc_ref("a")));
}

#[test]
fn test_duplicate_references_are_attempted_once() {
    let source = source_with(&[("a", type_document("A", "nt:base"))]);
    let mut repository = InMemoryRepository::new();
    let mut listener = RecordingListener::default();
    let mut registrar = SchemaRegistrar::new(&source);

    let report = registrar.register(
        &mut repository,
        &mut listener,
        &[doc_ref("a"), doc_ref("a")],
        &[],
    );

    assert_eq!(source.open_count(&doc_ref("a")), 1);
    assert_eq!(report.outcomes.len(), 1);
}

#[test]
fn test_post_install_documents_register_after_main_set() {
    let source = source_with(&[
        ("base", type_document("Base", "nt:base")),
        ("late", type_document("Late", "acme:Base")),
        ("bad-1", type_document("Bad1", "acme:Nowhere")),
        ("bad-2", format!("{ACME_NAMESPACE}- orphan")),
    ]);
    let mut repository = InMemoryRepository::new();
    let mut listener = RecordingListener::default();
    let mut registrar = SchemaRegistrar::new(&source);

    let report = registrar.register(
        &mut repository,
        &mut listener,
        &[doc_ref("base")],
        &[doc_ref("bad-1"), doc_ref("late"), doc_ref("bad-2")],
    );

    assert_eq!(listener.reported(), vec![&doc_ref("bad-1"), &doc_ref("bad-2")]);
    assert_eq!(source.open_count(&doc_ref("bad-1")), 1);
    assert!(repository.node_types().has_node_type("acme:Late"));
    let late = report
        .outcomes
        .iter()
        .find(|o| o.reference == doc_ref("late"))
        .unwrap();
    assert_eq!(late.phase, RegistrationPhase::PostInstall);
    assert!(late.is_success());
}

#[test]
fn test_existing_node_types_are_skipped_not_overwritten() {
    let redefinition = format!(
        "{ACME_NAMESPACE}[acme:A] > nt:base orderable\n[acme:Extra] > acme:A\n"
    );
    let source = source_with(&[
        ("a", type_document("A", "nt:base")),
        ("again", redefinition),
    ]);
    let mut repository = InMemoryRepository::new();
    let mut listener = RecordingListener::default();
    let mut registrar = SchemaRegistrar::new(&source);

    let report = registrar.register(
        &mut repository,
        &mut listener,
        &[doc_ref("a"), doc_ref("again")],
        &[],
    );

    assert!(report.is_complete());
    assert!(repository.node_types().has_node_type("acme:Extra"));
    let a = repository.node_types().node_type("acme:A").unwrap();
    assert!(!a.orderable_child_nodes);
}
