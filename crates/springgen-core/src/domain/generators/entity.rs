//! Data-model layer.

use crate::domain::generators::fragments::{ID_TYPE, LayerContext, indent, source_file};

pub fn render(ctx: &LayerContext<'_>) -> String {
    let persistence = format!("{}.*", ctx.config.persistence_package.resolve());
    let imports = ctx.imports(&["lombok.*", persistence.as_str()]);

    let fields = format!(
        "@Id\n@GeneratedValue(strategy = GenerationType.IDENTITY)\nprivate {ID_TYPE} id;"
    );
    let body = format!(
        "@Entity\n@Data\n@NoArgsConstructor\n@AllArgsConstructor\n@Builder\npublic class {} {{\n\n{}}}\n",
        ctx.type_name(),
        indent(&fields),
    );

    source_file(ctx.namespace(), &imports, &body)
}
