use std::sync::Arc;

use dragon_meta::{
    Fact, ItemCollection, StaticSource, StaticText, TypeDescriptor, DESCRIPTION_LABEL,
};

fn main() -> Result<(), dragon_meta::Error> {
    let port_text = StaticText::new(DESCRIPTION_LABEL, "Port to listen on")
        .with_translation("fr", "Port d'écoute")?;
    let host_text = StaticText::new(DESCRIPTION_LABEL, "Host name to bind");

    let items = ItemCollection::builder()
        .with_source(
            StaticSource::new()
                .with_item(
                    "Port",
                    [
                        Fact::from(TypeDescriptor::<u16>::from_str_parser().with_default(8080)),
                        Fact::flag("Required"),
                        Fact::localized(Arc::new(port_text)),
                    ],
                )
                .with_item(
                    "Host",
                    [
                        Fact::from(
                            TypeDescriptor::<String>::from_str_parser()
                                .with_default("localhost".to_string()),
                        ),
                        Fact::localized(Arc::new(host_text)),
                    ],
                )
                .with_item("Verbose", [Fact::flag("Switch")]),
        )
        .build()?;

    let mut names: Vec<&str> = items.names().collect();
    names.sort_unstable();

    for name in names {
        let item = items.get(name)?;
        let ty = item
            .declared_type()
            .map_or_else(|| "-".to_string(), |ty| ty.to_string());
        let default = item.default_as_text().unwrap_or_else(|| "-".to_string());
        let flags: Vec<&str> = item.flags().map(|flag| flag.name()).collect();
        let description = item.description_for("fr")?.unwrap_or_default();

        println!("{name}: type={ty} default={default} flags={flags:?}");
        println!("    {description}");
    }

    Ok(())
}
