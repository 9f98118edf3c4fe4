//! End-to-end checks of the naming pipeline against the shipped
//! `fontweights.toml`: humanize, split, infer, order, derive.

use fontpak::{
    collection_file_name, derive_basename, humanize_stem, infer_collection_kind, plan_rename,
    sort_fonts, weight_and_style, CollectionKind, FontDescriptor, SfntKind, StyleCatalog,
    WeightTable,
};

fn shipped_table() -> WeightTable {
    WeightTable::from_toml_str(include_str!("../fontweights.toml")).unwrap()
}

#[test]
fn shipped_config_defines_the_nine_standard_weights() {
    let table = shipped_table();
    let values: Vec<u16> = table.standard_weights().iter().map(|(v, _)| *v).collect();
    assert_eq!(values, vec![100, 200, 300, 400, 500, 600, 700, 800, 900]);
    assert_eq!(table.lookup_value("Demibold"), Some(600));
    assert_eq!(table.lookup_value("heavy"), Some(900));
    assert_eq!(table.canonical_name_for("ultra bold"), Some("Extra-Bold"));
}

#[test]
fn stem_to_rename_plan_round_trip() {
    let table = shipped_table();
    let catalog = StyleCatalog::new(&table);

    let plan = plan_rename(&table, &catalog, "PragmataProMonoVF_liga_0902-Extra-bold");
    assert_eq!(plan.family, "PragmataProMono Liga");
    assert_eq!(plan.subfamily, "Extra Bold");
    assert_eq!(plan.postscript_name, "PragmataProMonoLiga-ExtraBold");
    assert_eq!(plan.weight_class, 800);
}

#[test]
fn descriptors_flow_through_ordering_and_naming() {
    let table = shipped_table();

    let stems = ["CoolFont-Bold", "CoolFont-Regular", "CoolFont-Light-Italic"];
    let fonts: Vec<FontDescriptor> = stems
        .iter()
        .map(|stem| {
            let humanized = humanize_stem(stem);
            let (weight, italic) = weight_and_style(&table, None, Some(&humanized), stem);
            let mut font = FontDescriptor::new(format!("pack/{}.ttf", stem))
                .with_italic(italic)
                .with_kind(SfntKind::Ttf);
            font.weight_class = weight;
            font
        })
        .collect();

    let ordered = sort_fonts(&fonts);
    let names: Vec<&str> = ordered.iter().map(|f| f.file_name()).collect();
    assert_eq!(
        names,
        vec![
            "CoolFont-Light-Italic.ttf",
            "CoolFont-Regular.ttf",
            "CoolFont-Bold.ttf"
        ]
    );

    let basename = derive_basename(&ordered, None);
    assert_eq!(basename, "CoolFont");

    let kinds: Vec<SfntKind> = ordered.iter().filter_map(|f| f.kind).collect();
    let kind = infer_collection_kind(&kinds, None).unwrap();
    assert_eq!(kind, CollectionKind::Ttc);
    assert_eq!(collection_file_name(&basename, kind), "CoolFont.ttc");
}
