//! Service-interface layer.

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
    ctx.reference(&mut imports, Layer::Entity);

    let methods = ServiceOperation::for_mode(&mode)
        .iter()
        .map(|op| format!("{};\n", op.signature(ctx.entity)))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        "public interface {} {{\n\n{}}}\n",
        ctx.type_name(),
        indent(&methods),
    );

    source_file(ctx.namespace(), &imports, &body)
}
