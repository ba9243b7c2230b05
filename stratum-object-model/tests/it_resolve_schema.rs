//! End-to-end object-model resolution over loader-built stores.

mod support;

use stratum_model::Cardinality;
use stratum_object_model::{resolve_schema, PropertyType};
use support::{employment_fixture, ex, load_store};

#[tokio::test]
async fn test_employment_schema_resolves_end_to_end() {
    let fixture = employment_fixture();
    let store = load_store(&fixture, &[&ex("schema")]).await;

    let model = resolve_schema(&store, &ex("schema")).await.unwrap();

    // Schema scalars copied verbatim
    assert_eq!(model.schema.iri, ex("schema"));
    assert_eq!(model.schema.technical_label.as_deref(), Some("employment"));
    assert_eq!(
        model.schema.label.get("en"),
        Some(&"Employment".to_string())
    );

    // roots = [Employee]
    assert_eq!(model.schema.roots.len(), 1);
    let employee = model.class(model.schema.roots[0]);
    assert_eq!(employee.iri, ex("employee"));

    // Employee.extends = [Person]
    assert_eq!(employee.extends.len(), 1);
    let person_id = employee.extends[0];
    assert_eq!(model.class(person_id).iri, ex("person"));

    // Employee carries the merged interpretation chain
    assert_eq!(employee.pim_iri.as_deref(), Some(ex("pim-employee").as_str()));
    assert_eq!(
        employee.cim_iri.as_deref(),
        Some("http://cim.example.org/Employee")
    );
    // PSM label wins over the PIM bilingual label
    assert_eq!(employee.label.get("en"), Some(&"Employee".to_string()));
    assert_eq!(employee.label.get("cs"), None);

    // Employee.properties = [salary, worksFor]
    assert_eq!(employee.properties.len(), 2);

    let salary = model.property(employee.properties[0]);
    assert_eq!(salary.iri, ex("salary"));
    assert_eq!(salary.technical_label.as_deref(), Some("salary"));
    assert_eq!(
        salary.data_types,
        vec![PropertyType::Primitive {
            datatype: "http://www.w3.org/2001/XMLSchema#integer".to_string(),
        }]
    );
    // No cardinality declared anywhere: the default interval applies
    assert_eq!(salary.cardinality, Cardinality::default());
    // Absent PSM label filled from the PIM attribute
    assert_eq!(salary.label.get("en"), Some(&"salary".to_string()));

    let works_for = model.property(employee.properties[1]);
    assert_eq!(works_for.iri, ex("worksFor"));
    // Data type is the same resolved Person node the extends edge points at
    assert_eq!(works_for.data_types, vec![PropertyType::Class(person_id)]);
    // The PIM association end contributes its bilingual label...
    assert_eq!(works_for.label.get("en"), Some(&"works for".to_string()));
    assert_eq!(works_for.label.get("cs"), Some(&"pracuje pro".to_string()));
    // ...and its declared cardinality
    assert_eq!(works_for.cardinality, Cardinality::new(1, Some(1)));

    // classes = {Employee, Person}, exactly once each, roots first
    let class_iris: Vec<&str> = model
        .schema
        .classes
        .iter()
        .map(|&id| model.class(id).iri.as_str())
        .collect();
    assert_eq!(class_iris, vec![ex("employee").as_str(), ex("person").as_str()]);
}

#[tokio::test]
async fn test_resolution_is_idempotent() {
    let fixture = employment_fixture();
    let store = load_store(&fixture, &[&ex("schema")]).await;

    let first = resolve_schema(&store, &ex("schema")).await.unwrap();
    let second = resolve_schema(&store, &ex("schema")).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_self_referential_association_terminates() {
    let fixture = r#"
@prefix psm: <https://ns.stratum.dev/psm#> .
@prefix ex: <http://example.org/> .

ex:schema a psm:Schema ;
  psm:hasRoot ( ex:node ) ;
  psm:hasPart ( ex:node ex:self ) .

ex:node a psm:Class ;
  psm:hasLabel "Node"@en ;
  psm:hasPart ( ex:self ) .

ex:self a psm:AssociationEnd ;
  psm:hasTechnicalLabel "self" ;
  psm:hasPart ex:node .
"#;
    let store = load_store(fixture, &[&ex("schema")]).await;

    let model = resolve_schema(&store, &ex("schema")).await.unwrap();

    let (node_id, node) = model.class_by_iri(&ex("node")).unwrap();
    assert_eq!(node.properties.len(), 1);

    // The property's data type references the very class being resolved
    let property = model.property(node.properties[0]);
    assert_eq!(property.data_types, vec![PropertyType::Class(node_id)]);

    // No infinite unrolling: the class appears exactly once
    assert_eq!(model.schema.classes, vec![node_id]);
}

#[tokio::test]
async fn test_cyclic_extends_terminates() {
    let fixture = r#"
@prefix psm: <https://ns.stratum.dev/psm#> .
@prefix ex: <http://example.org/> .

ex:schema a psm:Schema ;
  psm:hasRoot ( ex:a ) ;
  psm:hasPart ( ex:a ex:b ) .

ex:a a psm:Class ; psm:extends ex:b .
ex:b a psm:Class ; psm:extends ex:a .
"#;
    let store = load_store(fixture, &[&ex("schema")]).await;

    let model = resolve_schema(&store, &ex("schema")).await.unwrap();

    let (a_id, a) = model.class_by_iri(&ex("a")).unwrap();
    let (b_id, b) = model.class_by_iri(&ex("b")).unwrap();
    assert_eq!(a.extends, vec![b_id]);
    assert_eq!(b.extends, vec![a_id]);
    assert_eq!(model.schema.classes.len(), 2);
}

#[tokio::test]
async fn test_missing_part_aborts_resolution() {
    // ex:gone is referenced but never defined; the loader drops it, so the
    // resolver must fail rather than emit a schema with holes.
    let fixture = r#"
@prefix psm: <https://ns.stratum.dev/psm#> .
@prefix ex: <http://example.org/> .

ex:schema a psm:Schema ;
  psm:hasRoot ( ex:node ) ;
  psm:hasPart ( ex:node ) .

ex:node a psm:Class ;
  psm:hasPart ( ex:gone ) .
"#;
    let store = load_store(fixture, &[&ex("schema")]).await;

    let err = resolve_schema(&store, &ex("schema")).await.unwrap_err();
    assert!(err.to_string().contains(&ex("gone")));
}
