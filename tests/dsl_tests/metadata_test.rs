use apidesign::dsl::*;
use apidesign::eval::{run_dsl, EvalContext, EvalError};
use apidesign::expr::{CompositeExpr, DataType, MetadataExpr, RootExpr};
use pretty_assertions::assert_eq;

fn account_field(root: &RootExpr, name: &str) -> MetadataExpr {
    root.user_type("Account")
        .and_then(|account| account.attribute().field(name))
        .and_then(|field| field.metadata.clone())
        .expect("field should carry metadata")
}

#[test]
fn test_struct_tag_accumulates_across_calls() {
    let root = run_dsl(|ctx| {
        user_type(ctx, "Account", |ctx| {
            attribute(ctx, "name", DataType::String, |ctx| {
                metadata(ctx, "struct:tag:json", ["myName,omitempty"]);
                metadata(ctx, "struct:tag:json", ["extra"]);
            });
        });
    })
    .unwrap();

    let metadata = account_field(&root, "name");
    assert_eq!(
        metadata.get("struct:tag:json").unwrap(),
        ["myName,omitempty", "extra"]
    );
    assert_eq!(
        metadata.struct_tag("json").as_deref(),
        Some("myName,omitempty extra")
    );
}

#[test]
fn test_keys_accumulate_independently() {
    let root = run_dsl(|ctx| {
        user_type(ctx, "Account", |ctx| {
            attribute(ctx, "service", DataType::String, |ctx| {
                metadata(ctx, "k1", ["a"]);
                metadata(ctx, "k2", ["x", "y"]);
                metadata(ctx, "k1", ["b"]);
                metadata(ctx, "k2", ["z"]);
            });
        });
    })
    .unwrap();

    let metadata = account_field(&root, "service");
    assert_eq!(metadata.get("k1").unwrap(), ["a", "b"]);
    assert_eq!(metadata.get("k2").unwrap(), ["x", "y", "z"]);
    assert_eq!(metadata.keys().collect::<Vec<_>>(), vec!["k1", "k2"]);
}

#[test]
fn test_type_metadata_lands_on_wrapped_attribute() {
    let root = run_dsl(|ctx| {
        user_type(ctx, "Account", |ctx| {
            metadata(ctx, "struct:field:name", ["AccountT"]);
            attribute(ctx, "id", DataType::Int, |_| {});
        });
        result_type(ctx, "application/vnd.sum", "Sum", |ctx| {
            metadata(ctx, "swagger:extension:x-kind", ["sum"]);
        });
    })
    .unwrap();

    let account = root.user_type("Account").unwrap();
    assert_eq!(
        account.attribute.metadata.as_ref().unwrap().struct_field_name(),
        Some("AccountT")
    );
    assert!(account.attribute.field("id").unwrap().metadata.is_none());

    let sum = root.result_type("Sum").unwrap();
    assert_eq!(
        sum.attribute().metadata.as_ref().unwrap().swagger_extensions(),
        vec![("x-kind", "sum")]
    );
}

#[test]
fn test_api_endpoint_and_payload_metadata() {
    let root = run_dsl(|ctx| {
        api(ctx, "calc", |ctx| {
            metadata(ctx, "swagger:tag:Backend", Vec::<String>::new());
            metadata(ctx, "swagger:tag:Backend:desc", ["Backend services"]);
        });
        service(ctx, "calc", |ctx| {
            endpoint(ctx, "add", |ctx| {
                metadata(ctx, "swagger:summary", ["Add two numbers"]);
                payload(ctx, |ctx| {
                    metadata(ctx, "struct:field:name", ["AddRequest"]);
                    attribute(ctx, "a", DataType::Int, |ctx| {
                        metadata(ctx, "struct:tag:json", ["a"]);
                    });
                });
            });
        });
    })
    .unwrap();

    let api_metadata = root.api.as_ref().unwrap().metadata.as_ref().unwrap();
    assert_eq!(api_metadata.swagger_tags(), vec!["Backend"]);
    assert!(api_metadata.get("swagger:tag:Backend").unwrap().is_empty());

    let add = root.service("calc").unwrap().endpoint("add").unwrap();
    assert_eq!(
        add.metadata.as_ref().unwrap().swagger_summary(),
        Some("Add two numbers")
    );

    let payload = add.payload.as_ref().unwrap();
    assert_eq!(
        payload.metadata.as_ref().unwrap().struct_field_name(),
        Some("AddRequest")
    );
    assert_eq!(
        payload.field("a").unwrap().metadata.as_ref().unwrap().struct_tag("json").as_deref(),
        Some("a")
    );
}

#[test]
fn test_rejected_call_leaves_existing_metadata_unchanged() {
    let mut ctx = EvalContext::new();
    api(&mut ctx, "calc", |ctx| metadata(ctx, "k", ["before"]));
    service(&mut ctx, "calc", |ctx| metadata(ctx, "k", ["inside service"]));
    metadata(&mut ctx, "k", ["top level"]);

    assert_eq!(ctx.errors().len(), 2);
    assert!(ctx
        .errors()
        .iter()
        .all(|error| matches!(error, EvalError::IncompatibleContext { dsl, .. } if dsl == "Metadata")));

    let api_metadata = ctx.root().api.as_ref().unwrap().metadata.as_ref().unwrap();
    assert_eq!(api_metadata.get("k").unwrap(), ["before"]);
    assert_eq!(api_metadata.len(), 1);
}

#[test]
fn test_independent_contexts_do_not_share_state() {
    let mut first = EvalContext::new();
    let mut second = EvalContext::new();

    api(&mut first, "one", |ctx| metadata(ctx, "k", ["1"]));
    metadata(&mut second, "k", ["2"]);
    api(&mut second, "two", |ctx| metadata(ctx, "k", ["3"]));

    assert!(!first.has_errors());
    assert_eq!(second.errors().len(), 1);

    let first = first.finish().unwrap();
    assert_eq!(first.api.unwrap().metadata.unwrap().get("k").unwrap(), ["1"]);
    let second_root = second.root();
    assert_eq!(
        second_root.api.as_ref().unwrap().metadata.as_ref().unwrap().get("k").unwrap(),
        ["3"]
    );
}

#[test]
fn test_design_serializes_metadata() {
    let root = run_dsl(|ctx| {
        user_type(ctx, "Account", |ctx| {
            attribute(ctx, "name", DataType::String, |ctx| {
                metadata(ctx, "struct:tag:json", ["name,omitempty"]);
            });
        });
    })
    .unwrap();

    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(
        json["types"][0]["attribute"]["fields"][0]["metadata"],
        serde_json::json!({ "struct:tag:json": ["name,omitempty"] })
    );

    let back: RootExpr = serde_json::from_value(json).unwrap();
    assert_eq!(back, root);
}
