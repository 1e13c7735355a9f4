use super::*;

fn text(props: &Props, prop: Property) -> Option<&str> {
    props.get(&prop).and_then(PropValue::as_text)
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("nível MÍNIMO"), "Nível mínimo");
    assert_eq!(capitalize("DEF."), "Def.");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("ê"), "Ê");
}

#[test]
fn test_simple_defense() {
    let props = PropertyNormalizer::new().normalize("Def: 30");
    assert_eq!(text(&props, Property::Defense), Some("30"));
    assert_eq!(props.len(), 1);
}

#[test]
fn test_label_case_and_padding() {
    let props = PropertyNormalizer::new().normalize("  nível NECESSÁRIO :: 45 ");
    // Splits into three parts on ':' and is skipped
    assert!(props.is_empty());

    let props = PropertyNormalizer::new().normalize("  nível NECESSÁRIO : 45 ");
    assert_eq!(text(&props, Property::MinimumLevel), Some("45"));
}

#[test]
fn test_lines_without_single_colon_are_skipped() {
    let props = PropertyNormalizer::new().normalize("Um item comum\nAtaque: 10: 20\nPeso 5");
    assert!(props.is_empty());
}

#[test]
fn test_unmapped_labels_dropped() {
    let props = PropertyNormalizer::new().normalize("Duração: 5 minutos\nAtaque: 12");
    assert_eq!(props.len(), 1);
    assert_eq!(text(&props, Property::Attack), Some("12"));
}

#[test]
fn test_neutro_type_becomes_element() {
    let props = PropertyNormalizer::new().normalize("Tipo: Neutro");
    assert_eq!(text(&props, Property::Element), Some("Neutro"));
    assert!(!props.contains_key(&Property::ItemType));
}

#[test]
fn test_equip_in_one_discarded() {
    let props = PropertyNormalizer::new().normalize("Equipa em: 1");
    assert!(!props.contains_key(&Property::EquipIn));
    assert!(props.is_empty());
}

#[test]
fn test_weight_one_hash() {
    let props = PropertyNormalizer::new().normalize("Peso: 1#");
    assert_eq!(text(&props, Property::Weight), Some("1"));
}

#[test]
fn test_first_seen_value_wins() {
    let props = PropertyNormalizer::new().normalize("Ataque: 50\nForça de ataque: 70\nAtaque: 50");
    assert_eq!(text(&props, Property::Attack), Some("50"));
}

#[test]
fn test_boxed_item_weight_collapses_to_one() {
    let desc = "Uma caixa contendo\n10 poções.\nPeso: 10\nPeso: 100";
    let props = PropertyNormalizer::new().normalize(desc);
    assert_eq!(text(&props, Property::Weight), Some("1"));
}

#[test]
fn test_box_detection_spans_line_joins() {
    // The first three lines are joined without separators
    let desc = "Uma cai\nxa\nde itens\nPeso: 10\nPeso: 20";
    let props = PropertyNormalizer::new().normalize(desc);
    assert_eq!(text(&props, Property::Weight), Some("1"));
}

#[test]
fn test_box_outside_first_three_lines() {
    let desc = "Linha 1\nLinha 2\nLinha 3\nCaixa\nPeso: 10\nPeso: 20";
    let props = PropertyNormalizer::new().normalize(desc);
    assert_eq!(text(&props, Property::Weight), Some("10"));
}

#[test]
fn test_single_weight_in_box_is_kept() {
    let props = PropertyNormalizer::new().normalize("Caixa de presente\nPeso: 20");
    assert_eq!(text(&props, Property::Weight), Some("20"));
}

#[test]
fn test_equip_in_split_into_list() {
    let props = PropertyNormalizer::new().normalize("Equipa em: Topo, Meio e Baixo");
    assert_eq!(
        props[&Property::EquipIn].as_list(),
        Some(&["Baixo".to_string(), "Meio".to_string(), "Topo".to_string()][..])
    );
}

#[test]
fn test_split_list() {
    assert_eq!(split_list("Cabeça e corpo / Mão"), vec!["Cabeça", "Corpo", "Mão"]);
    assert_eq!(split_list("mão direita/mão esquerda"), vec!["Mão direita", "Mão esquerda"]);
    assert_eq!(split_list("Capa E Calçado"), vec!["Calçado", "Capa"]);
    assert_eq!(split_list("Arma"), vec!["Arma"]);
    assert_eq!(split_list("Elmo,"), vec!["", "Elmo"]);
}

#[test]
fn test_class_equipment_redirect_via_alias() {
    let normalizer = PropertyNormalizer::new().with_alias("Classe", Property::Class);
    let props = normalizer.normalize("Classe: Equipamento de cabeça");
    assert_eq!(text(&props, Property::ItemType), Some("Equipamento de cabeça"));
    assert!(!props.contains_key(&Property::Class));
}

#[test]
fn test_class_redirect_blocked_by_card_type() {
    let normalizer = PropertyNormalizer::new().with_alias("Classe", Property::Class);
    let props = normalizer.normalize("Tipo: Carta\nClasse: Equipamento");
    assert_eq!(text(&props, Property::ItemType), Some("Carta"));
    assert_eq!(
        props[&Property::Class].as_list(),
        Some(&["Equipamento".to_string()][..])
    );
}

#[test]
fn test_class_list_via_alias() {
    let normalizer = PropertyNormalizer::new().with_alias("classes que utilizam", Property::Class);
    let props = normalizer.normalize("Classes que utilizam: Espadachim e Mercador");
    assert_eq!(
        props[&Property::Class].as_list(),
        Some(&["Espadachim".to_string(), "Mercador".to_string()][..])
    );
}

#[test]
fn test_alias_overrides_builtin() {
    let normalizer = PropertyNormalizer::new().with_alias("Tipo", Property::Element);
    assert_eq!(normalizer.resolve("Tipo"), Some(Property::Element));
    assert_eq!(normalizer.resolve("Tipo de item"), Some(Property::ItemType));
}

#[test]
fn test_full_description() {
    let desc = "Uma espada lendária.\n\
                Tipo: Espada\n\
                Ataque: 150\n\
                Peso: 120\n\
                Propriedade: Sagrado\n\
                Nível da arma: 4\n\
                Nível necessário: 48\n\
                Classes: Espadachim";
    let props = PropertyNormalizer::new().normalize(desc);
    assert_eq!(text(&props, Property::ItemType), Some("Espada"));
    assert_eq!(text(&props, Property::Attack), Some("150"));
    assert_eq!(text(&props, Property::Weight), Some("120"));
    assert_eq!(text(&props, Property::Element), Some("Sagrado"));
    assert_eq!(text(&props, Property::WeaponLevel), Some("4"));
    assert_eq!(text(&props, Property::MinimumLevel), Some("48"));
    assert_eq!(props.len(), 6);
}
