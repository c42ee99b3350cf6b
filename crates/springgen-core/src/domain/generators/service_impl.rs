//! Service-implementation layer.
//!
//! Structural scaffolding only: every method is a stub.

use crate::domain::{
    generators::{
        fragments::{LayerContext, indent, source_file},
        operations::ServiceOperation,
        retrieval_imports,
    },
    value_objects::Layer,
};

pub fn render(ctx: &LayerContext<'_>) -> String {
    let mode = ctx.retrieval_mode();

    let mut imports = ctx.imports(retrieval_imports(&mode));
    imports
        .framework("org.springframework.beans.factory.annotation.Autowired")
        .framework("org.springframework.stereotype.Service");
    for layer in [Layer::Entity, Layer::Repository, Layer::Service] {
        ctx.reference(&mut imports, layer);
    }

    let mut members = vec![format!(
        "@Autowired\nprivate {} repository;\n",
        Layer::Repository.type_name(ctx.entity)
    )];
    members.extend(ServiceOperation::for_mode(&mode).iter().map(|op| {
        format!(
            "@Override\npublic {} {{\n    {}\n}}\n",
            op.signature(ctx.entity),
            op.stub_body()
        )
    }));

    let body = format!(
        "@Service\npublic class {} implements {} {{\n\n{}}}\n",
        ctx.type_name(),
        Layer::Service.type_name(ctx.entity),
        indent(&members.join("\n")),
    );

    source_file(ctx.namespace(), &imports, &body)
}
