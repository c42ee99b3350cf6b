//! Controller layer.

use crate::domain::{
    generators::{
        fragments::{LayerContext, indent, lower_first, pluralize, source_file},
        operations::ServiceOperation,
    },
    value_objects::{Layer, RetrievalMode},
};

const COLLECTION_IMPORTS: &[&str] = &["java.util.List"];

const PAGED_IMPORTS: &[&str] = &[
    "org.springframework.data.domain.Page",
    "org.springframework.data.domain.Pageable",
    "org.springframework.data.domain.Sort",
    "org.springframework.data.web.PageableDefault",
];

/// `Order` → `/api/orders`.
pub fn route_root(entity: &str) -> String {
    format!("/api/{}", pluralize(&lower_first(entity)))
}

pub fn render(ctx: &LayerContext<'_>) -> String {
    let mode = ctx.retrieval_mode();

    let mut imports = ctx.imports(match mode {
        RetrievalMode::Collection => COLLECTION_IMPORTS,
        RetrievalMode::Paged(_) => PAGED_IMPORTS,
    });
    imports
        .framework("org.springframework.beans.factory.annotation.Autowired")
        .framework("org.springframework.web.bind.annotation.*");
    for layer in [Layer::Entity, Layer::Service] {
        ctx.reference(&mut imports, layer);
    }

    let mut members = vec![format!(
        "@Autowired\nprivate {} service;\n",
        Layer::Service.type_name(ctx.entity)
    )];
    members.extend(
        ServiceOperation::for_mode(&mode)
            .iter()
            .map(|op| endpoint(op, ctx.entity)),
    );

    let body = format!(
        "@RestController\n@RequestMapping(\"{}\")\npublic class {} {{\n\n{}}}\n",
        route_root(ctx.entity),
        ctx.type_name(),
        indent(&members.join("\n")),
    );

    source_file(ctx.namespace(), &imports, &body)
}

fn endpoint(op: &ServiceOperation<'_>, entity: &str) -> String {
    let mapping = match op.path() {
        Some(path) => format!("@{}(\"{path}\")", op.verb().annotation()),
        None => format!("@{}", op.verb().annotation()),
    };
    let call = format!("service.{}({})", op.method_name(), op.delegate_args());
    let statement = if op.return_type(entity) == "void" {
        format!("{call};")
    } else {
        format!("return {call};")
    };

    format!(
        "{mapping}\npublic {} {}({}) {{\n    {statement}\n}}\n",
        op.return_type(entity),
        op.handler_name(),
        op.handler_params(entity).join(", "),
    )
}
