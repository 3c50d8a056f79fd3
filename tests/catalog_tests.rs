// Host-side tests for the principle catalog and learning path.

use physics_lab::core::catalog::{
    outline, path_nodes_containing, Category, Principle, PrincipleId, LEARNING_PATH, PRINCIPLES,
};
use physics_lab::core::LabError;
use std::collections::HashSet;

#[test]
fn catalog_is_indexed_by_id() {
    assert_eq!(PRINCIPLES.len(), PrincipleId::COUNT);
    for (i, id) in PrincipleId::ALL.iter().enumerate() {
        assert_eq!(id.index(), i);
        assert_eq!(PRINCIPLES[i].id, *id);
        assert_eq!(Principle::lookup(*id).id, *id);
    }
}

#[test]
fn ids_round_trip_through_strings() {
    for id in PrincipleId::ALL {
        assert_eq!(id.as_str().parse::<PrincipleId>(), Ok(id));
        assert_eq!(id.to_string(), id.as_str());
    }
    assert_eq!(
        "lens".parse::<PrincipleId>(),
        Err(LabError::UnknownPrinciple("lens".to_owned()))
    );
    assert_eq!("energyFlow".parse::<PrincipleId>(), Ok(PrincipleId::EnergyFlow));
}

#[test]
fn every_principle_is_complete() {
    for p in PRINCIPLES.iter() {
        assert!(!p.name.is_empty(), "{}", p.id);
        assert!(!p.formula.is_empty(), "{}", p.id);
        assert!(!p.summary.is_empty(), "{}", p.id);
        assert!(!p.params.is_empty(), "{}", p.id);
        let ids: HashSet<&str> = p.params.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), p.params.len(), "duplicate parameter in {}", p.id);
        for spec in p.params {
            assert!(spec.min < spec.max, "{}.{}", p.id, spec.id);
            assert!(spec.step > 0.0, "{}.{}", p.id, spec.id);
            assert!(
                spec.min <= spec.default && spec.default <= spec.max,
                "{}.{}",
                p.id,
                spec.id
            );
            assert_eq!(p.param(spec.id), Some(spec));
        }
        if let Some(practice) = &p.practice {
            assert!(!practice.targets.is_empty(), "{}", p.id);
            assert!(practice.tolerance > 0.0, "{}", p.id);
        }
    }
}

#[test]
fn defaults_match_specs() {
    let p = Principle::lookup(PrincipleId::Coulomb);
    let snap = p.default_params();
    assert_eq!(snap.get("q1"), 3.0);
    assert_eq!(snap.get("q2"), -2.0);
    assert_eq!(snap.get("distance"), 0.8);
    assert_eq!(p.param("nope"), None);
}

#[test]
fn outline_follows_category_order() {
    let groups = outline();
    let order: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
    let expected: Vec<Category> = Category::ALL
        .iter()
        .copied()
        .filter(|c| order.contains(c))
        .collect();
    assert_eq!(order, expected);
    let total: usize = groups.iter().map(|(_, ids)| ids.len()).sum();
    assert_eq!(total, PrincipleId::COUNT);
    assert_eq!(groups[0].0, Category::Mechanics);
    assert_eq!(groups[0].1[0], PrincipleId::Newton);
    assert_eq!(Category::Fluids.label(), "Fluids & Pressure");
}

#[test]
fn learning_path_nodes() {
    assert_eq!(LEARNING_PATH.len(), 8);
    assert_eq!(LEARNING_PATH[0].label, "Mechanics basics");
    assert_eq!(LEARNING_PATH[0].first(), Some(PrincipleId::Newton));
    let hosts: Vec<&str> = path_nodes_containing(PrincipleId::Capacitor)
        .map(|n| n.id)
        .collect();
    assert_eq!(hosts, vec!["path-electric"]);
    assert_eq!(path_nodes_containing(PrincipleId::Reaction).count(), 0);
}

#[test]
fn step_wraps() {
    assert_eq!(PrincipleId::Newton.step(-1), PrincipleId::Induction);
    assert_eq!(PrincipleId::Induction.step(1), PrincipleId::Newton);
    assert_eq!(PrincipleId::Newton.step(PrincipleId::COUNT as i32), PrincipleId::Newton);
    assert_eq!(PrincipleId::Ohm.step(-2), PrincipleId::Reflection);
}
