use std::collections::HashSet;

use randovec_core::chunk::chunk;
use randovec_core::generator::{generate, CONTENT_LEN, PLACEHOLDER_COMPONENT};
use randovec_core::import::{prepare, wrap};
use randovec_core::types::{ClassDefinition, InsertObject, SchemaDescription};
use randovec_core::{Error, RunSettings};

#[test]
fn generate_returns_exact_count_and_shapes() {
    for (count, dim) in [(0, 8), (1, 1), (5, 3), (12, 16)] {
        let objects = generate(count, dim).expect("generate");
        assert_eq!(objects.len(), count);
        for o in &objects {
            assert_eq!(o.content.len(), CONTENT_LEN);
            assert_eq!(o.vector.len(), dim);
            assert!(o.vector.iter().all(|&x| x == PLACEHOLDER_COMPONENT));
        }
    }
}

#[test]
fn generated_content_is_lowercase_hex() {
    let objects = generate(50, 2).expect("generate");
    for o in &objects {
        assert!(o.content.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')), "{:?}", o.content);
    }
}

#[test]
fn fewer_than_sample_size_does_not_panic() {
    assert_eq!(generate(2, 4).expect("generate").len(), 2);
}

#[test]
fn chunk_concatenation_reproduces_input() {
    for len in 1..=20usize {
        for size in 1..=7usize {
            let items: Vec<usize> = (0..len).collect();
            let chunks = chunk(items.clone(), size).expect("chunk");
            let (last, full) = chunks.split_last().expect("at least one chunk");
            assert!(full.iter().all(|c| c.len() == size), "len={len} size={size}");
            assert!((1..=size).contains(&last.len()), "len={len} size={size}");
            assert_eq!(chunks.concat(), items);
        }
    }
}

#[test]
fn chunk_boundaries() {
    assert_eq!(chunk(vec![1, 2, 3], 3).unwrap(), vec![vec![1, 2, 3]]);
    assert_eq!(chunk(vec![1, 2], 3).unwrap(), vec![vec![1, 2]]);
    assert_eq!(chunk(vec![1, 2, 3, 4, 5, 6, 7], 3).unwrap(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
}

#[test]
fn chunk_of_empty_input_is_one_empty_chunk() {
    let chunks: Vec<Vec<u8>> = chunk(Vec::new(), 4).unwrap();
    assert_eq!(chunks, vec![Vec::<u8>::new()]);
}

#[test]
fn chunk_size_zero_is_invalid_argument() {
    let err = chunk(vec![1, 2, 3], 0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn wrapped_ids_are_unique() {
    let objects = wrap(generate(1000, 1).expect("generate"));
    let ids: HashSet<_> = objects.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), objects.len());
}

#[test]
fn prepare_partitions_in_order() {
    let run = RunSettings { num_objects: 7, batch_size: 3, vector_size: 2 };
    let chunks = prepare(&run).expect("prepare");
    assert_eq!(chunks.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 3, 1]);
}

#[test]
fn insert_object_serializes_as_weaviate_object() {
    let obj = InsertObject::from(randovec_core::types::DataObject { content: "abc".into(), vector: vec![0.5] });
    let json = serde_json::to_value(&obj).unwrap();
    assert_eq!(json["class"], "RandClass");
    assert_eq!(json["properties"]["content"], "abc");
    assert_eq!(json["vector"], serde_json::json!([0.5]));
    assert_eq!(json["id"], obj.id.to_string());
}

#[test]
fn rand_class_definition_shape() {
    let json = serde_json::to_value(ClassDefinition::rand_class()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "class": "RandClass",
            "properties": [{ "name": "content", "dataType": ["text"], "description": "Random text" }],
            "replicationConfig": { "factor": 3, "asyncEnabled": true }
        })
    );
}

#[test]
fn schema_description_ignores_unknown_fields() {
    let schema: SchemaDescription = serde_json::from_value(serde_json::json!({
        "classes": [
            { "class": "RandClass", "vectorizer": "none", "properties": [{ "name": "content", "dataType": ["text"], "indexFilterable": true }] },
            { "class": "Other" }
        ]
    }))
    .unwrap();
    assert_eq!(schema.class_names(), vec!["RandClass", "Other"]);
    assert!(schema.contains("Other"));
}
