//! Persistence-access layer.

use crate::domain::{
    generators::fragments::{ID_TYPE, LayerContext, source_file},
    value_objects::Layer,
};

pub fn render(ctx: &LayerContext<'_>) -> String {
    let mut imports = ctx.imports(&[
        "org.springframework.stereotype.Repository",
        "org.springframework.data.jpa.repository.JpaRepository",
    ]);
    ctx.reference(&mut imports, Layer::Entity);

    let body = format!(
        "@Repository\npublic interface {} extends JpaRepository<{}, {ID_TYPE}> {{}}\n",
        ctx.type_name(),
        ctx.entity,
    );

    source_file(ctx.namespace(), &imports, &body)
}
