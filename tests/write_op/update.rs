use bson::{self, Bson};
use mongodb_write_ops::{UpdateOperation, WriteOperationBase, WriteOpType};
use mongodb_write_ops::wire_protocol::flags::OpUpdateFlags;
use mongodb_write_ops::Error::ArgumentError;
use std::io::Cursor;

use super::{element, encode, read_cstring, read_i32};

fn set_x() -> UpdateOperation {
    UpdateOperation::new(doc! { "_id": 1 }, doc! { "$set": { "x": 2 } }, OpUpdateFlags::empty())
        .expect("Failed to build update operation")
}

fn with_flags(bits: i32) -> UpdateOperation {
    UpdateOperation::new(
        doc! { "_id": 1 },
        doc! { "$set": { "x": 2 } },
        OpUpdateFlags::from_bits_truncate(bits),
    ).expect("Failed to build update operation")
}

#[test]
fn reports_kind_and_batch_name() {
    let op = set_x();
    assert_eq!(op.operation_type(), WriteOpType::Update);
    assert_eq!(op.batch_name(), "updates");

    // Repeated calls see the same immutable operation.
    assert_eq!(op.operation_type(), op.operation_type());
    assert_eq!(op.batch_name(), op.batch_name());
    assert_eq!(op.incremental_size(), op.incremental_size());
}

#[test]
fn command_element_without_flags() {
    let op = set_x();
    let mut batch = vec![];
    op.append_self_to_command(&mut batch);

    assert_eq!(batch.len(), 1);
    assert_eq!(element(&batch, 0), doc! {
        "q": { "_id": 1 },
        "u": { "$set": { "x": 2 } },
        "upsert": false,
        "multi": false
    });
}

#[test]
fn command_element_with_upsert() {
    let mut batch = vec![];
    with_flags(1).append_self_to_command(&mut batch);

    let doc = element(&batch, 0);
    assert_eq!(doc.get_bool("upsert").unwrap(), true);
    assert_eq!(doc.get_bool("multi").unwrap(), false);
}

#[test]
fn command_element_with_upsert_and_multi() {
    let mut batch = vec![];
    with_flags(3).append_self_to_command(&mut batch);

    let doc = element(&batch, 0);
    assert_eq!(doc.get_bool("upsert").unwrap(), true);
    assert_eq!(doc.get_bool("multi").unwrap(), true);
}

#[test]
fn command_element_with_multi_only() {
    let mut batch = vec![];
    with_flags(2).append_self_to_command(&mut batch);

    let doc = element(&batch, 0);
    assert_eq!(doc.get_bool("upsert").unwrap(), false);
    assert_eq!(doc.get_bool("multi").unwrap(), true);
}

#[test]
fn command_element_keys_are_canonical() {
    let mut batch = vec![];
    with_flags(3).append_self_to_command(&mut batch);

    let doc = element(&batch, 0);
    let keys: Vec<_> = doc.keys().map(|key| key.as_str()).collect();
    assert_eq!(keys, vec!["q", "u", "upsert", "multi"]);
}

#[test]
fn appends_preserve_call_order() {
    let first = UpdateOperation::new(doc! { "_id": 1 }, doc! { "$inc": { "n": 1 } }, OpUpdateFlags::empty())
        .unwrap();
    let second = UpdateOperation::new(doc! { "_id": 2 }, doc! { "n": 5 }, OpUpdateFlags::UPSERT)
        .unwrap();

    let mut batch = vec![];
    first.append_self_to_command(&mut batch);
    second.append_self_to_command(&mut batch);

    assert_eq!(batch.len(), 2);
    assert_eq!(element(&batch, 0).get_document("q").unwrap(), &doc! { "_id": 1 });
    assert_eq!(element(&batch, 1).get_document("q").unwrap(), &doc! { "_id": 2 });
    assert_eq!(element(&batch, 1).get_bool("upsert").unwrap(), true);
}

#[test]
fn command_round_trip_keeps_documents_byte_for_byte() {
    let selector = doc! { "b": 1, "a": { "$gt": 3 }, "name": "x" };
    let update = doc! { "z": 1, "y": [1, 2, 3], "x": { "nested": true } };
    let op = UpdateOperation::new(selector.clone(), update.clone(), OpUpdateFlags::MULTI_UPDATE)
        .unwrap();

    let mut batch = vec![];
    op.append_self_to_command(&mut batch);

    // Encode the whole element and decode it again, as the server would.
    let bytes = encode(&element(&batch, 0));
    let decoded = bson::decode_document(&mut Cursor::new(bytes)).unwrap();

    assert_eq!(encode(decoded.get_document("q").unwrap()), encode(&selector));
    assert_eq!(encode(decoded.get_document("u").unwrap()), encode(&update));
    assert_eq!(decoded.get_bool("upsert").unwrap(), false);
    assert_eq!(decoded.get_bool("multi").unwrap(), true);
}

#[test]
fn incremental_size_matches_request_bytes() {
    let cases = vec![
        (doc! {}, doc! {}, 0),
        (doc! { "_id": 1 }, doc! { "$set": { "x": 2 } }, 1),
        (doc! { "tags": ["a", "b"] }, doc! { "name": "replacement", "n": 3.5 }, 3),
    ];

    for (selector, update, bits) in cases {
        let op = UpdateOperation::new(selector, update, OpUpdateFlags::from_bits_truncate(bits))
            .unwrap();

        let mut buffer = vec![];
        op.append_self_to_request(&mut buffer).unwrap();

        assert!(op.incremental_size() >= buffer.len() as i32);
        assert_eq!(op.incremental_size(), buffer.len() as i32);
    }
}

#[test]
fn request_body_is_flags_selector_update() {
    let op = with_flags(3);
    let mut buffer = vec![];
    op.append_self_to_request(&mut buffer).unwrap();

    let selector = encode(&doc! { "_id": 1 });
    let update = encode(&doc! { "$set": { "x": 2 } });

    assert_eq!(&buffer[0..4], &[3, 0, 0, 0]);
    assert_eq!(&buffer[4..4 + selector.len()], &selector[..]);
    assert_eq!(&buffer[4 + selector.len()..], &update[..]);
}

#[test]
fn request_appends_without_touching_earlier_bytes() {
    let mut buffer = vec![0xAA, 0xBB];
    set_x().append_self_to_request(&mut buffer).unwrap();
    set_x().append_self_to_request(&mut buffer).unwrap();

    assert_eq!(&buffer[0..2], &[0xAA, 0xBB]);
    assert_eq!(buffer.len() as i32, 2 + 2 * set_x().incremental_size());
}

#[test]
fn start_request_writes_zero_and_namespace() {
    let mut buffer = vec![];
    set_x().start_request("test.people", true, &mut buffer).unwrap();

    let mut cursor = Cursor::new(buffer);
    assert_eq!(read_i32(&mut cursor), 0);
    assert_eq!(read_cstring(&mut cursor), "test.people");
    assert_eq!(cursor.position() as usize, cursor.get_ref().len());
}

#[test]
fn start_command_writes_verb() {
    let mut command = bson::Document::new();
    set_x().start_command("test.people", &mut command).unwrap();

    assert_eq!(command, doc! { "update": "people" });
}

#[test]
fn start_command_rejects_bare_collection_name() {
    let mut command = bson::Document::new();
    match set_x().start_command("people", &mut command) {
        Err(ArgumentError(_)) => (),
        other => panic!("Expected an argument error, got {:?}", other),
    }
    assert!(command.is_empty());
}

#[test]
fn operators_and_replacements_encode_alike() {
    let operators = UpdateOperation::new(doc! { "_id": 1 }, doc! { "$set": { "x": 2 } }, OpUpdateFlags::empty())
        .unwrap();
    let replacement = UpdateOperation::new(doc! { "_id": 1 }, doc! { "x": 2 }, OpUpdateFlags::empty())
        .unwrap();

    let mut batch = vec![];
    operators.append_self_to_command(&mut batch);
    replacement.append_self_to_command(&mut batch);

    assert_eq!(element(&batch, 0).get_document("u").unwrap(), &doc! { "$set": { "x": 2 } });
    assert_eq!(element(&batch, 1).get_document("u").unwrap(), &doc! { "x": 2 });

    let mut buffer = vec![];
    replacement.append_self_to_request(&mut buffer).unwrap();
    assert_eq!(buffer.len() as i32, replacement.incremental_size());
}

#[test]
fn diagnostic_document_has_named_fields() {
    let mut obj = bson::Document::new();
    with_flags(1).append_self_to_bson_obj(&mut obj);

    assert_eq!(obj.get("q"), Some(&Bson::Document(doc! { "_id": 1 })));
    assert_eq!(obj.get("u"), Some(&Bson::Document(doc! { "$set": { "x": 2 } })));
    assert_eq!(obj.get_bool("upsert").unwrap(), true);
    assert_eq!(obj.get_bool("multi").unwrap(), false);
}
