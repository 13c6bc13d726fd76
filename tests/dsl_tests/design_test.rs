use apidesign::dsl::*;
use apidesign::eval::run_dsl;
use apidesign::expr::{CompositeExpr, DataType, RootExpr};
use apidesign::InternalResult;
use pretty_assertions::assert_eq;

fn calc_design() -> InternalResult<RootExpr> {
    let root = run_dsl(|ctx| {
        api(ctx, "calc", |ctx| {
            description(ctx, "HTTP service for adding numbers");
            metadata(ctx, "swagger:extension:x-apis-json", [r#"{"URL": "http://goa.design"}"#]);
        });

        user_type(ctx, "Operands", |ctx| {
            description(ctx, "Operands of an arithmetic operation");
            attribute(ctx, "a", DataType::Int, |ctx| {
                metadata(ctx, "struct:tag:json", ["left"]);
            });
            attribute(ctx, "b", DataType::Int, |ctx| {
                metadata(ctx, "struct:tag:json", ["right"]);
            });
        });

        result_type(ctx, "application/vnd.calc.sum", "Sum", |ctx| {
            attribute(ctx, "value", DataType::Int, |_| {});
            attribute(
                ctx,
                "history",
                DataType::ArrayOf(Box::new(DataType::Named("Operands".into()))),
                |_| {},
            );
        });

        service(ctx, "calc", |ctx| {
            description(ctx, "The calc service performs additions");
            endpoint(ctx, "add", |ctx| {
                metadata(ctx, "swagger:summary", ["Add two numbers"]);
                payload(ctx, |ctx| {
                    attribute(ctx, "operands", DataType::Named("Operands".into()), |_| {});
                });
            });
            endpoint(ctx, "reset", |_| {});
        });
    })?;
    Ok(root)
}

#[test]
fn test_calc_design() {
    let root = calc_design().unwrap();

    let api = root.api.as_ref().unwrap();
    assert_eq!(api.name, "calc");
    assert_eq!(
        api.description.as_deref(),
        Some("HTTP service for adding numbers")
    );

    let operands = root.user_type("Operands").unwrap();
    let tags: Vec<_> = operands
        .attribute()
        .fields
        .iter()
        .map(|field| field.metadata.as_ref().unwrap().struct_tag("json").unwrap())
        .collect();
    assert_eq!(tags, vec!["left", "right"]);

    let sum = root.result_type("Sum").unwrap();
    assert_eq!(
        sum.attribute().field("history").unwrap().data_type.to_string(),
        "ArrayOf(Operands)"
    );

    let calc = root.service("calc").unwrap();
    assert_eq!(calc.endpoints.len(), 2);
    assert!(calc.endpoint("reset").unwrap().metadata.is_none());
    assert!(calc.endpoint("reset").unwrap().payload.is_none());
    let add_payload = calc.endpoint("add").unwrap().payload.as_ref().unwrap();
    assert_eq!(
        add_payload.field("operands").unwrap().data_type,
        DataType::Named("Operands".to_string())
    );
}

#[test]
fn test_design_evaluation_is_deterministic() {
    let first = serde_json::to_string(&calc_design().unwrap()).unwrap();
    let second = serde_json::to_string(&calc_design().unwrap()).unwrap();
    assert_eq!(first, second);
}
