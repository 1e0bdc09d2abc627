//! Contract tests for the request record as seen by producers and consumers.

use lmeval_core::{Arguments, Document, Instance, InstanceError, RequestKind, RequestMetadata};
use serde_json::{json, Value};

fn question_doc(question: &str) -> Document {
    let mut doc = Document::new();
    doc.insert("question".to_string(), json!(question));
    doc
}

#[test]
fn generate_until_request_exposes_identity_and_args() {
    let inst = Instance::from_positional(
        RequestKind::GenerateUntil,
        question_doc("2+2=?"),
        Arguments::new(vec![json!("2+2=?"), json!({"until": ["\n"]})]),
        0,
        &[json!("arith_task"), json!(7), json!(1)],
    )
    .expect("valid metadata");

    assert_eq!(inst.request_type, RequestKind::GenerateUntil);
    assert_eq!(inst.task_name(), Some("arith_task"));
    assert_eq!(inst.doc_id(), Some(7));
    assert_eq!(inst.repeats(), Some(1));
    assert_eq!(inst.args(), &[json!("2+2=?"), json!({"until": ["\n"]})]);
    assert!(inst.resps.is_empty());
    assert_eq!(inst.doc.get("question"), Some(&json!("2+2=?")));
}

#[test]
fn default_metadata_leaves_identity_unset() {
    let inst = Instance::new(RequestKind::Loglikelihood, question_doc("q"), "ctx", 0);

    assert!(inst.task_name().is_none());
    assert!(inst.doc_id().is_none());
    assert!(inst.repeats().is_none());
    assert_eq!(inst.metadata(), &RequestMetadata::default());
}

#[test]
fn malformed_metadata_fails_construction() {
    let result = Instance::from_positional(
        RequestKind::GenerateUntil,
        question_doc("2+2=?"),
        "2+2=?",
        0,
        &[json!("only_one_field")],
    );

    match result {
        Err(InstanceError::InvalidMetadataShape { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 1);
        }
        other => panic!("expected InvalidMetadataShape, got {other:?}"),
    }
}

#[test]
fn empty_metadata_packing_is_rejected() {
    let result = Instance::from_positional(
        RequestKind::Loglikelihood,
        question_doc("q"),
        "ctx",
        0,
        &[],
    );
    assert!(matches!(
        result,
        Err(InstanceError::InvalidMetadataShape { actual: 0, .. })
    ));
}

#[test]
fn result_slots_are_not_shared_between_instances() {
    let mut first = Instance::new(RequestKind::GenerateUntil, question_doc("a"), "a", 0);
    let second = Instance::new(RequestKind::GenerateUntil, question_doc("b"), "b", 0);

    first.push_response(json!("answer"));
    first.set_filtered_response("strict-match", json!("answer"));

    assert_eq!(first.resps.len(), 1);
    assert_eq!(first.filtered_resps.len(), 1);
    assert!(second.resps.is_empty());
    assert!(second.filtered_resps.is_empty());
}

#[test]
fn cloned_instance_owns_its_own_slots() {
    let original = Instance::new(RequestKind::Loglikelihood, question_doc("q"), "ctx", 0);
    let mut copy = original.clone();

    copy.push_response(json!([-2.5, false]));

    assert!(original.resps.is_empty());
    assert_eq!(copy.resps.len(), 1);
}

#[test]
fn args_wraps_bare_value_and_keeps_tuples() {
    let bare = Instance::new(
        RequestKind::LoglikelihoodRolling,
        question_doc("q"),
        Arguments::single("the whole passage"),
        0,
    );
    assert_eq!(bare.args(), &[json!("the whole passage")]);

    let tuple = Instance::new(
        RequestKind::Loglikelihood,
        question_doc("q"),
        Arguments::new(vec![json!("a"), json!("b"), json!("c")]),
        0,
    );
    assert_eq!(tuple.args(), &[json!("a"), json!("b"), json!("c")]);
}

#[test]
fn args_is_stable_across_reads() {
    let inst = Instance::new(
        RequestKind::MultipleChoice,
        question_doc("q"),
        Arguments::new(vec![json!("Q: pick one\nA:"), json!(" yes")]),
        1,
    );
    let first: Vec<Value> = inst.args().to_vec();
    let second: Vec<Value> = inst.args().to_vec();
    assert_eq!(first, second);
}

#[test]
fn repeated_requests_share_identity_but_not_slots() {
    let metadata = RequestMetadata::for_task("gsm8k", 5, 3);
    let args = Arguments::new(vec![json!("Q: 3*3?\nA:"), json!({"until": ["Q:"]})]);

    let mut repeats: Vec<Instance> = (0..3)
        .map(|idx| {
            Instance::with_metadata(
                RequestKind::GenerateUntil,
                question_doc("3*3?"),
                args.clone(),
                idx,
                metadata.clone(),
            )
        })
        .collect();
    repeats[0].push_response(json!("9"));

    for (idx, inst) in repeats.iter().enumerate() {
        assert_eq!(inst.idx, idx);
        assert_eq!(inst.metadata(), &metadata);
        assert_eq!(inst.args(), args.as_slice());
    }
    assert_eq!(repeats[0].resps.len(), 1);
    assert!(repeats[1].resps.is_empty());
    assert!(repeats[2].resps.is_empty());
}

#[test]
fn identity_survives_result_accumulation() {
    let mut inst = Instance::with_metadata(
        RequestKind::GenerateUntil,
        question_doc("2+2=?"),
        "2+2=?",
        0,
        RequestMetadata::for_task("arith_task", 7, 1),
    );
    inst.push_response(json!("4"));
    inst.set_filtered_response("strict-match", json!("4"));

    let before = inst.metadata().clone();
    let round_tripped: Instance =
        serde_json::from_str(&serde_json::to_string(&inst).expect("encode")).expect("decode");

    assert_eq!(inst.task_name(), Some("arith_task"));
    assert_eq!(inst.doc_id(), Some(7));
    assert_eq!(round_tripped.metadata(), &before);
    assert_eq!(round_tripped.resps, vec![json!("4")]);
}

#[test]
fn null_metadata_decodes_as_unset_identity() {
    let inst: Instance = serde_json::from_value(json!({
        "request_type": "generate_until",
        "doc": {"question": "2+2=?"},
        "arguments": ["2+2=?", {"until": ["\n"]}],
        "idx": 0,
        "metadata": null
    }))
    .expect("decode");

    assert!(inst.task_name().is_none());
    assert!(inst.doc_id().is_none());
    assert!(inst.repeats().is_none());
}

#[test]
fn lm_eval_style_record_decodes() {
    let inst: Instance = serde_json::from_value(json!({
        "request_type": "loglikelihood",
        "doc": {"goal": "boil water", "sol1": "use a pot", "sol2": "use a sieve"},
        "arguments": ["Question: boil water\nAnswer:", " use a pot"],
        "idx": 0,
        "metadata": ["piqa", 12, 1],
        "resps": [[-3.2, false]],
        "filtered_resps": {"none": [-3.2, false]}
    }))
    .expect("decode");

    assert_eq!(inst.request_type, RequestKind::Loglikelihood);
    assert_eq!(inst.task_name(), Some("piqa"));
    assert_eq!(inst.doc_id(), Some(12));
    assert_eq!(inst.resps, vec![json!([-3.2, false])]);
    assert_eq!(inst.filtered_response("none"), Some(&json!([-3.2, false])));
}
