//! Loader pipeline integration: Turtle text through the worklist loader
//! into a resource store.

mod support;

use std::sync::Arc;
use stratum_model::{Cardinality, FederatedStore, ResourceStore, RoleTag};
use stratum_model_loader::{pim_adapters, GraphLoader};
use support::{ex, pim_vocabulary};

#[tokio::test]
async fn test_vocabulary_loads_every_role() {
    let source = pim_vocabulary();
    let loader = GraphLoader::new(pim_adapters());

    let store = loader.load(&source, [ex("vocabulary")]).await.unwrap();

    // Schema + 2 classes + attribute + association + 2 ends
    assert_eq!(store.len(), 7);

    let schema = store
        .read_resource(&ex("vocabulary"))
        .await
        .unwrap()
        .unwrap();
    let schema_role = schema.as_pim_schema().unwrap();
    assert_eq!(schema_role.label.get("cs"), Some(&"Lide".to_string()));
    assert_eq!(schema_role.parts.len(), 6);

    let name = store.read_resource(&ex("name")).await.unwrap().unwrap();
    let attribute = name.as_pim_attribute().unwrap();
    assert_eq!(attribute.owner_class.as_deref(), Some(ex("person").as_str()));
    assert_eq!(
        attribute.datatype.as_deref(),
        Some("http://www.w3.org/2001/XMLSchema#string")
    );

    let employer = store
        .read_resource(&ex("employment-employer"))
        .await
        .unwrap()
        .unwrap();
    let end = employer.as_pim_association_end().unwrap();
    assert_eq!(end.cardinality, Some(Cardinality::new(1, Some(1))));
    assert_eq!(end.participant.as_deref(), Some(ex("organization").as_str()));
}

#[tokio::test]
async fn test_roots_alone_reach_the_whole_vocabulary() {
    // Loading from a single class still pulls in everything reachable
    let source = pim_vocabulary();
    let loader = GraphLoader::new(pim_adapters());

    let store = loader.load(&source, [ex("employment")]).await.unwrap();

    // association -> ends -> participants
    let iris = store.list_resources().await.unwrap();
    assert!(iris.contains(&ex("employment-employee")));
    assert!(iris.contains(&ex("person")));
    assert!(iris.contains(&ex("organization")));
    // The schema itself was never referenced
    assert!(!iris.contains(&ex("vocabulary")));
}

#[tokio::test]
async fn test_loaded_store_composes_with_federation() {
    let source = pim_vocabulary();
    let loader = GraphLoader::new(pim_adapters());

    let classes_store = loader.load(&source, [ex("person")]).await.unwrap();
    let full_store = loader.load(&source, [ex("vocabulary")]).await.unwrap();

    let federated = FederatedStore::new(vec![
        Arc::new(classes_store) as Arc<dyn ResourceStore>,
        Arc::new(full_store),
    ]);

    let classes = federated
        .list_resources_of_type(RoleTag::PimClass)
        .await
        .unwrap();
    let person_count = classes.iter().filter(|iri| **iri == ex("person")).count();
    assert_eq!(person_count, 1);

    let person = federated.read_resource(&ex("person")).await.unwrap().unwrap();
    assert_eq!(
        person.as_pim_class().unwrap().interpretation.as_deref(),
        Some("http://cim.example.org/Person")
    );
}
