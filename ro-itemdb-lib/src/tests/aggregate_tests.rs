use super::*;

fn table(entries: &[(u32, &str)]) -> Table {
    entries.iter().map(|&(id, v)| (id, v.to_string())).collect()
}

fn sword_tables() -> SourceTables {
    SourceTables {
        names: table(&[(1, "Sword_of_Truth")]),
        descriptions: table(&[(1, "Ataque: 50\nDef: 5")]),
        ..Default::default()
    }
}

#[test]
fn test_end_to_end_sword() {
    let items = build_items(&sword_tables(), &PropertyNormalizer::new());
    let db = Database::build(&items);

    let record = &db.items[&1];
    assert_eq!(record.id, 1);
    assert_eq!(record.name, "Sword of Truth");
    assert_eq!(record.res, None);
    assert_eq!(record.ilus, None);
    assert_eq!(record.prefix, None);
    assert_eq!(record.text, "Ataque: 50<br />\nDef: 5");

    let expected: Props = [
        (Property::Attack, PropValue::Number(50.0)),
        (Property::Defense, PropValue::Number(5.0)),
    ]
    .into_iter()
    .collect();
    assert_eq!(record.props, expected);
}

#[test]
fn test_items_without_name_are_excluded() {
    let tables = SourceTables {
        names: table(&[(1, "Apple")]),
        resources: table(&[(1, "apple"), (2, "orphan")]),
        descriptions: table(&[(2, "Ataque: 1")]),
        ..Default::default()
    };
    let items = build_items(&tables, &PropertyNormalizer::new());
    assert_eq!(items.len(), 1);
    assert!(items[&1].desc.is_none());
    assert_eq!(items[&1].res.as_deref(), Some("apple"));
}

#[test]
fn test_empty_joined_values_are_absent() {
    let tables = SourceTables {
        names: table(&[(7, "Card")]),
        illustrations: table(&[(7, "")]),
        prefixes: table(&[(7, "Sortudo")]),
        ..Default::default()
    };
    let items = build_items(&tables, &PropertyNormalizer::new());
    assert_eq!(items[&7].ilus, None);
    assert_eq!(items[&7].prefix.as_deref(), Some("Sortudo"));
}

#[test]
fn test_empty_prefix_is_kept() {
    let tables = SourceTables {
        names: table(&[(1, "Card")]),
        prefixes: table(&[(1, "")]),
        ..Default::default()
    };
    let items = build_items(&tables, &PropertyNormalizer::new());
    assert_eq!(items[&1].prefix.as_deref(), Some(""));
    assert_eq!(ItemRecord::from_item(&items[&1]).prefix.as_deref(), Some(""));
}

#[test]
fn test_record_tokens_and_text() {
    let tables = SourceTables {
        names: table(&[(4001, "Poring_Card")]),
        resources: table(&[(4001, "sword")]),
        illustrations: table(&[(4001, "poring_card")]),
        ..Default::default()
    };
    let items = build_items(&tables, &PropertyNormalizer::new());
    let record = ItemRecord::from_item(&items[&4001]);
    assert_eq!(record.res.as_deref(), Some("zna3vplpj4eok"));
    assert_eq!(record.ilus.as_deref(), Some("qh722xyomcge2"));
    assert_eq!(record.text, "");
    assert!(record.props.is_empty());
}

#[test]
fn test_coerce_number() {
    assert_eq!(coerce_number("30"), 30.0);
    assert_eq!(coerce_number(" 2.5 "), 2.5);
    assert_eq!(coerce_number("muito"), 0.0);
    assert_eq!(coerce_number("30,5"), 0.0);
    assert_eq!(coerce_number(""), 0.0);
}

#[test]
fn test_coerce_number_rejects_non_finite() {
    assert_eq!(coerce_number("NaN"), 0.0);
    assert_eq!(coerce_number("inf"), 0.0);
    assert_eq!(coerce_number("-infinity"), 0.0);
}

#[test]
fn test_non_finite_values_survive_write_and_read() {
    let tables = SourceTables {
        names: table(&[(1, "Caixa")]),
        descriptions: table(&[(1, "Peso: NaN\nAtaque: inf")]),
        ..Default::default()
    };
    let items = build_items(&tables, &PropertyNormalizer::new());
    let db = Database::build(&items);

    let props = &db.items[&1].props;
    assert_eq!(props[&Property::Weight].as_number(), Some(0.0));
    assert_eq!(props[&Property::Attack].as_number(), Some(0.0));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    db.write(&path, false).unwrap();
    assert_eq!(Database::read(&path).unwrap(), db);
}

#[test]
fn test_coerce_props_only_touches_numeric() {
    let props: Props = [
        (Property::Attack, PropValue::Text("forte".into())),
        (Property::Weight, PropValue::Text("12".into())),
        (Property::WeaponLevel, PropValue::Text("3".into())),
        (Property::EquipIn, PropValue::List(vec!["Mão".into()])),
    ]
    .into_iter()
    .collect();
    let coerced = coerce_props(&props);
    assert_eq!(coerced[&Property::Attack].as_number(), Some(0.0));
    assert_eq!(coerced[&Property::Weight].as_number(), Some(12.0));
    assert_eq!(coerced[&Property::WeaponLevel], PropValue::Text("3".into()));
    assert_eq!(coerced[&Property::EquipIn], PropValue::List(vec!["Mão".into()]));
}

#[test]
fn test_metaprops_only_indexed_keys() {
    let tables = SourceTables {
        names: table(&[(1, "A"), (2, "B"), (3, "C")]),
        descriptions: table(&[
            (1, "Tipo: Arma\nAtaque: 10\nPropriedade: Fogo\nEquipa em: Mão direita e Mão esquerda"),
            (2, "Tipo: Neutro\nPeso: 5\nCombina com: Armadura\nNível da arma: 2"),
            (3, "Tipo: Arma\nEquipa em: Mão direita\nNível necessário: 10"),
        ]),
        ..Default::default()
    };
    let items = build_items(&tables, &PropertyNormalizer::new());
    let metaprops = build_metaprops(items.values());

    assert!(metaprops.keys().all(|p| p.is_metaprop()));
    assert_eq!(metaprops.len(), 5);
    assert_eq!(
        metaprops[&Property::ItemType].iter().collect::<Vec<_>>(),
        vec!["Arma"]
    );
    assert_eq!(
        metaprops[&Property::Element].iter().collect::<Vec<_>>(),
        vec!["Fogo", "Neutro"]
    );
    assert_eq!(
        metaprops[&Property::EquipIn].iter().collect::<Vec<_>>(),
        vec!["Mão direita", "Mão esquerda"]
    );
    assert_eq!(
        metaprops[&Property::UseOn].iter().collect::<Vec<_>>(),
        vec!["Armadura"]
    );
    assert_eq!(
        metaprops[&Property::WeaponLevel].iter().collect::<Vec<_>>(),
        vec!["2"]
    );
}

#[test]
fn test_json_shape() {
    let items = build_items(&sword_tables(), &PropertyNormalizer::new());
    let db = Database::build(&items);
    let json: serde_json::Value = serde_json::to_value(&db).unwrap();

    assert!(json["metaprops"].as_object().unwrap().is_empty());
    let item = &json["items"]["1"];
    assert_eq!(item["id"], 1);
    assert_eq!(item["name"], "Sword of Truth");
    assert!(item["res"].is_null());
    assert!(item["ilus"].is_null());
    assert!(item["prefix"].is_null());
    assert_eq!(item["props"]["attack"], 50.0);
    assert_eq!(item["props"]["defense"], 5.0);
}

#[test]
fn test_metaprops_serialize_as_arrays() {
    let mut metaprops = Metaprops::new();
    metaprops
        .entry(Property::EquipIn)
        .or_default()
        .extend(["Topo".to_string(), "Baixo".to_string()]);
    let db = Database {
        metaprops,
        items: BTreeMap::new(),
    };
    let json = serde_json::to_string(&db).unwrap();
    assert_eq!(json, r#"{"metaprops":{"equipIn":["Baixo","Topo"]},"items":{}}"#);
}

#[test]
fn test_database_write_and_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("processed").join("db.json");
    let items = build_items(&sword_tables(), &PropertyNormalizer::new());
    let db = Database::build(&items);

    db.write(&path, false).unwrap();
    assert_eq!(Database::read(&path).unwrap(), db);

    db.write(&path, true).unwrap();
    assert_eq!(Database::read(&path).unwrap(), db);
}
